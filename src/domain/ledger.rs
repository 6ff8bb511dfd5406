use super::clock::now_in_seconds;
use super::{Category, Cents, Clock, SystemClock, Transaction, TransactionKind};

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    /// Sum of absolute expense amounts
    pub total: Cents,
    pub count: usize,
}

/// In-memory, append-only record of income and expense transactions.
///
/// Aggregates are always recomputed from the transaction list; nothing is cached.
/// The only way to remove transactions is [`Ledger::clear`].
#[derive(Debug)]
pub struct Ledger<C: Clock = SystemClock> {
    transactions: Vec<Transaction>,
    clock: C,
}

impl Ledger<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Ledger<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Ledger<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            transactions: Vec::new(),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Record income. The amount must be strictly positive.
    pub fn add_income(
        &mut self,
        amount_cents: Cents,
        description: impl Into<String>,
    ) -> Result<&Transaction, LedgerError> {
        ensure_positive(TransactionKind::Income, amount_cents)?;
        self.ensure_total_fits(TransactionKind::Income, amount_cents)?;

        let transaction =
            Transaction::income(amount_cents, description.into(), now_in_seconds(&self.clock));
        Ok(self.push(transaction))
    }

    /// Record an expense. The amount must be strictly positive; it is stored negated.
    ///
    /// The category is normalized; blank input and the reserved income label
    /// both become "Miscellaneous".
    pub fn add_expense(
        &mut self,
        amount_cents: Cents,
        category: &str,
        description: impl Into<String>,
    ) -> Result<&Transaction, LedgerError> {
        ensure_positive(TransactionKind::Expense, amount_cents)?;
        self.ensure_total_fits(TransactionKind::Expense, amount_cents)?;

        let category = match Category::parse(category) {
            c if c.is_income() => Category::miscellaneous(),
            c => c,
        };
        let transaction = Transaction::expense(
            amount_cents,
            category,
            description.into(),
            now_in_seconds(&self.clock),
        );
        Ok(self.push(transaction))
    }

    /// Income and expense totals must each stay within `Cents`. Every other
    /// aggregate (balance, running sums, per-category totals) is bounded by them.
    fn ensure_total_fits(
        &self,
        kind: TransactionKind,
        amount_cents: Cents,
    ) -> Result<(), LedgerError> {
        let current = match kind {
            TransactionKind::Income => self.total_income(),
            TransactionKind::Expense => self.total_expenses(),
        };
        match current.checked_add(amount_cents) {
            Some(_) => Ok(()),
            None => Err(LedgerError::AmountOverflow {
                kind,
                amount: amount_cents,
            }),
        }
    }

    fn push(&mut self, transaction: Transaction) -> &Transaction {
        self.transactions.push(transaction);
        &self.transactions[self.transactions.len() - 1]
    }

    /// Net of all transactions. Always equals `total_income() - total_expenses()`.
    pub fn balance(&self) -> Cents {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    pub fn total_income(&self) -> Cents {
        self.transactions
            .iter()
            .map(Transaction::amount)
            .filter(|amount| *amount > 0)
            .sum()
    }

    /// Expenses as a positive total.
    pub fn total_expenses(&self) -> Cents {
        -self
            .transactions
            .iter()
            .map(Transaction::amount)
            .filter(|amount| *amount < 0)
            .sum::<Cents>()
    }

    /// Expense totals per category, in order of each category's first appearance.
    pub fn spending_by_category(&self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();

        for transaction in self.transactions.iter().filter(|t| t.is_expense()) {
            let spent = -transaction.amount();
            match totals
                .iter_mut()
                .find(|entry| &entry.category == transaction.category())
            {
                Some(entry) => {
                    entry.total += spent;
                    entry.count += 1;
                }
                None => totals.push(CategoryTotal {
                    category: transaction.category().clone(),
                    total: spent,
                    count: 1,
                }),
            }
        }

        totals
    }

    /// All transactions in insertion order. Empty when nothing has been recorded.
    pub fn list_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Discard every transaction. Clearing an empty ledger is a no-op.
    pub fn clear(&mut self) {
        self.transactions.clear();
    }
}

fn ensure_positive(kind: TransactionKind, amount_cents: Cents) -> Result<(), LedgerError> {
    if amount_cents <= 0 {
        return Err(LedgerError::NonPositiveAmount {
            kind,
            amount: amount_cents,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    NonPositiveAmount { kind: TransactionKind, amount: Cents },
    AmountOverflow { kind: TransactionKind, amount: Cents },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::NonPositiveAmount { kind, .. } => match kind {
                TransactionKind::Income => write!(f, "Income amount must be positive."),
                TransactionKind::Expense => write!(f, "Expense amount must be positive."),
            },
            LedgerError::AmountOverflow { kind, .. } => write!(
                f,
                "Amount is too large: total {} would exceed the supported range.",
                match kind {
                    TransactionKind::Income => "income",
                    TransactionKind::Expense => "expenses",
                }
            ),
        }
    }
}

impl std::error::Error for LedgerError {}
