use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Category, Cents};

pub type TransactionId = Uuid;

/// Display format for transaction timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single signed money event. Income is positive, expense negative.
/// Transactions are immutable and can only be created by the [`Ledger`](super::Ledger).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    id: TransactionId,
    amount_cents: Cents,
    category: Category,
    description: String,
    timestamp: DateTime<Local>,
}

impl Transaction {
    pub(super) fn income(
        amount_cents: Cents,
        description: String,
        timestamp: DateTime<Local>,
    ) -> Self {
        debug_assert!(amount_cents > 0, "Income amount must be positive");
        Self {
            id: Uuid::new_v4(),
            amount_cents,
            category: Category::income(),
            description,
            timestamp,
        }
    }

    pub(super) fn expense(
        amount_cents: Cents,
        category: Category,
        description: String,
        timestamp: DateTime<Local>,
    ) -> Self {
        debug_assert!(amount_cents > 0, "Expense amount must be positive");
        debug_assert!(!category.is_income(), "Expenses cannot be categorized as income");
        Self {
            id: Uuid::new_v4(),
            amount_cents: -amount_cents,
            category,
            description,
            timestamp,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Signed amount: positive for income, negative for expenses.
    pub fn amount(&self) -> Cents {
        self.amount_cents
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn kind(&self) -> TransactionKind {
        if self.amount_cents > 0 {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind() == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind() == TransactionKind::Expense
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;

    fn at_noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 12, 0, 5).unwrap()
    }

    #[test]
    fn test_income_is_positive_and_categorized() {
        let tx = Transaction::income(100000, "salary".into(), at_noon());

        assert_eq!(tx.amount(), 100000);
        assert_eq!(tx.category().as_str(), "Income");
        assert_eq!(tx.kind(), TransactionKind::Income);
        assert!(tx.is_income());
    }

    #[test]
    fn test_expense_is_negated() {
        let tx = Transaction::expense(2000, Category::parse("food"), "lunch".into(), at_noon());

        assert_eq!(tx.amount(), -2000);
        assert_eq!(tx.category().as_str(), "Food");
        assert!(tx.is_expense());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Transaction::income(1, String::new(), at_noon());
        let b = Transaction::income(1, String::new(), at_noon());
        assert_ne!(a.id(), b.id());
    }
}
