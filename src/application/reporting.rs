use serde::{Deserialize, Serialize};

use crate::domain::Cents;

/// Totals shown on the summary screen and fed to the income/expense chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: Cents,
    pub total_expenses: Cents,
    pub balance: Cents,
    pub transaction_count: usize,
}

impl Summary {
    /// Share of the income+expense volume that is income, in percent.
    /// `None` when there is no volume at all.
    pub fn income_share(&self) -> Option<f64> {
        // Each total fits in Cents but their sum may not
        let volume = self.total_income as f64 + self.total_expenses as f64;
        if volume == 0.0 {
            return None;
        }
        Some(self.total_income as f64 / volume * 100.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryReport {
    pub categories: Vec<CategorySummary>,
    pub total: Cents,
}

impl CategoryReport {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == category)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total: Cents,
    pub count: usize,
    pub percentage: f64,
}
