use tracing::{debug, info, warn};

use crate::domain::{
    format_cents, parse_cents, Cents, Clock, Ledger, SystemClock, Transaction,
};

use super::{AppError, CategoryReport, CategorySummary, Summary};

/// Application service providing high-level operations over the ledger.
/// This is the interface used by the interactive menu and the exporters.
pub struct TrackerService<C: Clock = SystemClock> {
    ledger: Ledger<C>,
}

impl TrackerService<SystemClock> {
    pub fn new() -> Self {
        Self::with_ledger(Ledger::new())
    }
}

impl Default for TrackerService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TrackerService<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::with_ledger(Ledger::with_clock(clock))
    }

    pub fn with_ledger(ledger: Ledger<C>) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Ledger<C> {
        &self.ledger
    }

    // ========================
    // Recording
    // ========================

    pub fn record_income(
        &mut self,
        amount_cents: Cents,
        description: &str,
    ) -> Result<&Transaction, AppError> {
        match self.ledger.add_income(amount_cents, description) {
            Ok(transaction) => {
                info!(
                    id = %transaction.id(),
                    amount = %format_cents(transaction.amount()),
                    "Recorded income"
                );
                Ok(transaction)
            }
            Err(err) => {
                warn!(amount = amount_cents, "Rejected income: {}", err);
                Err(err.into())
            }
        }
    }

    pub fn record_expense(
        &mut self,
        amount_cents: Cents,
        category: &str,
        description: &str,
    ) -> Result<&Transaction, AppError> {
        match self.ledger.add_expense(amount_cents, category, description) {
            Ok(transaction) => {
                if transaction.category().as_str() != category.trim() {
                    debug!(
                        raw = category,
                        normalized = %transaction.category(),
                        "Normalized expense category"
                    );
                }
                info!(
                    id = %transaction.id(),
                    amount = %format_cents(transaction.amount()),
                    category = %transaction.category(),
                    "Recorded expense"
                );
                Ok(transaction)
            }
            Err(err) => {
                warn!(amount = amount_cents, "Rejected expense: {}", err);
                Err(err.into())
            }
        }
    }

    /// Discard the whole history. Safe to call on an empty ledger.
    pub fn clear_history(&mut self) {
        let discarded = self.ledger.len();
        self.ledger.clear();
        info!(discarded, "Cleared transaction history");
    }

    // ========================
    // Queries
    // ========================

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.list_transactions()
    }

    pub fn balance(&self) -> Cents {
        self.ledger.balance()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total_income: self.ledger.total_income(),
            total_expenses: self.ledger.total_expenses(),
            balance: self.ledger.balance(),
            transaction_count: self.ledger.len(),
        }
    }

    /// Spending per category with each category's share of total expenses.
    pub fn category_report(&self) -> CategoryReport {
        let totals = self.ledger.spending_by_category();
        let total = self.ledger.total_expenses();

        let categories = totals
            .into_iter()
            .map(|t| CategorySummary {
                category: t.category.to_string(),
                total: t.total,
                count: t.count,
                percentage: if total > 0 {
                    t.total as f64 / total as f64 * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        CategoryReport { categories, total }
    }
}

/// Parse user-typed amount text into cents.
pub fn parse_amount(input: &str) -> Result<Cents, AppError> {
    parse_cents(input).map_err(|source| AppError::InvalidAmount {
        input: input.trim().to_string(),
        source,
    })
}
