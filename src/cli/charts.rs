//! Plain-text charts drawn from the aggregate queries.
//!
//! These are read-only consumers of [`Summary`] and [`CategoryReport`]; they
//! never touch the ledger directly.

use crate::application::{CategoryReport, Summary};
use crate::domain::{format_money, Cents};

pub const DEFAULT_CHART_WIDTH: usize = 40;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Income vs expenses as two proportional bars (stand-in for a pie chart).
pub fn income_expense_chart(summary: &Summary, currency: &str, width: usize) -> String {
    let Some(income_share) = summary.income_share() else {
        return "No income or expenses to chart.".to_string();
    };
    let expense_share = 100.0 - income_share;

    let rows = [
        ("Income", summary.total_income, income_share),
        ("Expenses", summary.total_expenses, expense_share),
    ];

    let mut out = String::from("Income vs Expenses\n");
    for (label, amount, share) in rows {
        let filled = scaled(share, 100.0, width);
        out.push_str(&format!(
            "{:<10}{} {:>5.1}%  {}\n",
            label,
            bar(filled, width),
            share,
            format_money(amount, currency)
        ));
    }
    out
}

/// Horizontal bar per category, scaled to the largest category.
pub fn category_chart(report: &CategoryReport, currency: &str, width: usize) -> String {
    if report.is_empty() {
        return "No expenses to chart.".to_string();
    }

    let label_width = report
        .categories
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Total".len());
    let largest: Cents = report.categories.iter().map(|c| c.total).max().unwrap_or(0);

    let mut out = String::from("Spending by Category\n");
    for cat in &report.categories {
        let filled = scaled(cat.total as f64, largest as f64, width);
        out.push_str(&format!(
            "{:<label_width$}  {} {}\n",
            cat.category,
            bar(filled, width),
            format_money(cat.total, currency),
        ));
    }
    out.push_str(&format!(
        "{:<label_width$}  {}\n",
        "Total",
        format_money(report.total, currency)
    ));
    out
}

fn scaled(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 {
        return 0;
    }
    let cells = (value / max * width as f64).round() as usize;
    // Keep non-zero values visible
    if cells == 0 && value > 0.0 { 1 } else { cells.min(width) }
}

fn bar(filled: usize, width: usize) -> String {
    let mut s: String = std::iter::repeat_n(FILLED, filled).collect();
    s.extend(std::iter::repeat_n(EMPTY, width - filled));
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::CategorySummary;

    fn summary(income: Cents, expenses: Cents) -> Summary {
        Summary {
            total_income: income,
            total_expenses: expenses,
            balance: income - expenses,
            transaction_count: 2,
        }
    }

    #[test]
    fn test_income_expense_chart() {
        let chart = income_expense_chart(&summary(7500, 2500), "$", 8);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "Income vs Expenses");
        assert_eq!(lines[1], "Income    ██████░░  75.0%  $75.00");
        assert_eq!(lines[2], "Expenses  ██░░░░░░  25.0%  $25.00");
    }

    #[test]
    fn test_income_expense_chart_empty() {
        let chart = income_expense_chart(&summary(0, 0), "$", 8);
        assert_eq!(chart, "No income or expenses to chart.");
    }

    #[test]
    fn test_category_chart_scales_to_largest() {
        let report = CategoryReport {
            categories: vec![
                CategorySummary {
                    category: "Rent".into(),
                    total: 10000,
                    count: 1,
                    percentage: 80.0,
                },
                CategorySummary {
                    category: "Food".into(),
                    total: 2500,
                    count: 2,
                    percentage: 20.0,
                },
            ],
            total: 12500,
        };

        let chart = category_chart(&report, "$", 4);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "Spending by Category");
        assert_eq!(lines[1], "Rent   ████ $100.00");
        assert_eq!(lines[2], "Food   █░░░ $25.00");
        assert_eq!(lines[3], "Total  $125.00");
    }

    #[test]
    fn test_tiny_values_stay_visible() {
        assert_eq!(scaled(1.0, 100000.0, 40), 1);
        assert_eq!(scaled(0.0, 100.0, 40), 0);
    }
}
