pub use error::{ArrayError, CapacityKind, LedgerError, Result, RosterError};
pub use ledger::{Ledger, LedgerConfig, LedgerReport, SkipReason, Unprocessed};
pub use model::*;
pub use roster::{RosterLimits, RosterStore};

pub mod arrays;
mod error;
pub mod ledger;
mod model;
mod roster;
pub mod validation;
