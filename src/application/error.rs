use thiserror::Error;

use crate::domain::{LedgerError, ParseCentsError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Ledger(#[from] LedgerError),

    #[error("Invalid amount '{input}': {source}")]
    InvalidAmount {
        input: String,
        #[source]
        source: ParseCentsError,
    },

    #[error("Export failed: {0}")]
    Export(#[from] anyhow::Error),
}

impl AppError {
    /// Errors the user can correct by retrying with different input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Ledger(_) | AppError::InvalidAmount { .. })
    }
}
