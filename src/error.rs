/// Which bounded collection ran out of room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CapacityKind {
    Teams,
    Players,
}

/// All errors that can occur while managing a roster.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A team or player name is empty or contains no alphabetic character.
    #[error("invalid name {name:?}: must contain at least one letter")]
    InvalidName { name: String },

    /// The store or a team is already full.
    #[error("maximum number of {kind} reached ({limit})")]
    CapacityExceeded { kind: CapacityKind, limit: usize },

    /// No team is enrolled at the given index.
    #[error("unknown team index {index} ({team_count} teams enrolled)")]
    UnknownTeam { index: usize, team_count: usize },

    /// Another player in the same team already has this name, ignoring case.
    #[error("duplicate player name {name:?} in team")]
    DuplicateName { name: String },

    /// Another player in the same team already wears this number.
    #[error("kit number {kit_number} already taken")]
    DuplicateKitNumber { kit_number: i32 },

    /// The kit number is outside 1..=99.
    #[error("invalid kit number {kit_number}: must be between 1 and 99")]
    InvalidKitNumber { kit_number: i32 },

    /// The birthdate fails the year, month or day-of-month rules.
    #[error("invalid birthdate {day}/{month}/{year}")]
    InvalidBirthdate { day: u8, month: u8, year: u16 },
}

/// Errors from the array helpers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// The position is outside `1..len`.
    #[error("invalid position {pos} for array of length {len}")]
    InvalidPosition { pos: usize, len: usize },

    /// The element count does not equal `rows * cols`.
    #[error("array of length {len} cannot be reshaped to {rows}x{cols}")]
    ShapeMismatch { len: usize, rows: usize, cols: usize },

    /// Rows of the matrix have different lengths.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors from batch transaction processing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The batch is longer than the configured maximum.
    #[error("batch of {count} transactions exceeds the limit of {max}")]
    TooManyTransactions { count: usize, max: usize },

    /// Applying a transaction overflowed the balance.
    #[error("balance overflowed while applying transaction {index}")]
    BalanceOverflow { index: usize },
}

pub type Result<T, E = RosterError> = std::result::Result<T, E>;
