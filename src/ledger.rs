use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{LedgerError, Result};

/// Settings for a [`Ledger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerConfig {
    pub opening_balance: i64,
    pub max_transactions: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            opening_balance: 1000,
            max_transactions: 100,
        }
    }
}

/// Why a transaction was left unprocessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum SkipReason {
    /// The withdrawal would have taken the balance below zero.
    Overdraft,
    /// The balance reached zero earlier in the batch.
    BalanceExhausted,
}

/// A transaction left out of the balance, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Unprocessed {
    pub amount: i64,
    pub reason: SkipReason,
}

/// Outcome of processing one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerReport {
    pub final_balance: i64,
    /// Skipped transactions, in the order they appeared in the batch.
    pub unprocessed: Vec<Unprocessed>,
    /// True if processing stopped early because the balance hit zero.
    pub halted: bool,
}

/// Applies deposits (positive) and withdrawals (negative) to a running balance.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    config: LedgerConfig,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> LedgerConfig {
        self.config
    }

    /// Process a batch of transactions starting from the opening balance.
    ///
    /// Overdrawing withdrawals are skipped. Once the balance lands on exactly
    /// zero, the rest of the batch is left unprocessed.
    #[instrument(skip(self, transactions), fields(count = transactions.len()))]
    pub fn process(&self, transactions: &[i64]) -> Result<LedgerReport, LedgerError> {
        if transactions.len() > self.config.max_transactions {
            return Err(LedgerError::TooManyTransactions {
                count: transactions.len(),
                max: self.config.max_transactions,
            });
        }

        let mut balance = self.config.opening_balance;
        let mut unprocessed = Vec::new();
        let mut halted = false;

        for (index, &amount) in transactions.iter().enumerate() {
            let next = balance
                .checked_add(amount)
                .ok_or(LedgerError::BalanceOverflow { index })?;

            if amount < 0 && next < 0 {
                debug!(amount, balance, "withdrawal exceeds balance");
                unprocessed.push(Unprocessed {
                    amount,
                    reason: SkipReason::Overdraft,
                });
                continue;
            }

            balance = next;
            if balance == 0 {
                halted = true;
                unprocessed.extend(transactions[index + 1..].iter().map(|&amount| Unprocessed {
                    amount,
                    reason: SkipReason::BalanceExhausted,
                }));
                break;
            }
        }

        debug!(
            final_balance = balance,
            unprocessed = unprocessed.len(),
            halted,
            "processed transactions"
        );
        Ok(LedgerReport {
            final_balance: balance,
            unprocessed,
            halted,
        })
    }
}
