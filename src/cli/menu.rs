use std::fs::File;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::application::{parse_amount, AppError, TrackerService};
use crate::domain::{format_money, Clock, Transaction};
use crate::io::{ExportFormat, Exporter};

use super::charts::{category_chart, income_expense_chart, DEFAULT_CHART_WIDTH};

/// Render settings for the menu.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    pub currency: String,
    pub chart_width: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

const MENU: &str = "\
--- Personal Financial Tracker ---
1. Add Income
2. Add Expense
3. View Transactions
4. View Summary
5. Chart: Income vs Expenses
6. Chart: Spending by Category
7. Export Transactions
8. Clear Transaction History
9. Exit";

/// Numbered interactive menu. Reads answers line by line from `input` and
/// writes everything to `output`, so it can be driven by a script in tests.
pub struct Menu<'a, C: Clock, R: BufRead, W: Write> {
    service: &'a mut TrackerService<C>,
    input: R,
    output: W,
    config: MenuConfig,
}

impl<'a, C: Clock, R: BufRead, W: Write> Menu<'a, C, R, W> {
    pub fn new(
        service: &'a mut TrackerService<C>,
        input: R,
        output: W,
        config: MenuConfig,
    ) -> Self {
        Self {
            service,
            input,
            output,
            config,
        }
    }

    /// Run until the user exits or input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                debug!("Input closed, leaving menu");
                writeln!(self.output)?;
                break;
            };

            match self.dispatch(choice.trim())? {
                LoopControl::Continue => {}
                LoopControl::Exit => break,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<LoopControl> {
        debug!(choice, "Menu selection");
        match choice {
            "1" => self.add_income()?,
            "2" => self.add_expense()?,
            "3" => self.view_transactions()?,
            "4" => self.view_summary()?,
            "5" => self.show_income_expense_chart()?,
            "6" => self.show_category_chart()?,
            "7" => self.export()?,
            "8" => self.clear()?,
            "9" => {
                writeln!(self.output, "Exiting tracker. Goodbye!")?;
                return Ok(LoopControl::Exit);
            }
            _ => writeln!(self.output, "Invalid choice. Please try again.")?,
        }
        Ok(LoopControl::Continue)
    }

    /// Print `label`, then read one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn report(&mut self, err: AppError) -> Result<()> {
        if err.is_user_error() {
            writeln!(self.output, "{}", err)?;
            Ok(())
        } else {
            Err(err.into())
        }
    }

    fn add_income(&mut self) -> Result<()> {
        let Some(raw_amount) = self.prompt("Enter income amount: ")? else {
            return Ok(());
        };
        let amount = match parse_amount(&raw_amount) {
            Ok(amount) => amount,
            Err(err) => return self.report(err),
        };
        let description = self
            .prompt("Enter description (optional): ")?
            .unwrap_or_default();

        let currency = self.config.currency.clone();
        match self.service.record_income(amount, &description) {
            Ok(tx) => {
                let message = format!(
                    "Income of {} recorded.",
                    format_money(tx.amount(), &currency)
                );
                writeln!(self.output, "{}", message)?;
                Ok(())
            }
            Err(err) => self.report(err),
        }
    }

    fn add_expense(&mut self) -> Result<()> {
        let Some(raw_amount) = self.prompt("Enter expense amount: ")? else {
            return Ok(());
        };
        let amount = match parse_amount(&raw_amount) {
            Ok(amount) => amount,
            Err(err) => return self.report(err),
        };
        let category = self.prompt("Enter expense category: ")?.unwrap_or_default();
        let description = self
            .prompt("Enter description (optional): ")?
            .unwrap_or_default();

        let currency = self.config.currency.clone();
        match self.service.record_expense(amount, &category, &description) {
            Ok(tx) => {
                let message = format!(
                    "Expense of {} recorded under {}.",
                    format_money(-tx.amount(), &currency),
                    tx.category()
                );
                writeln!(self.output, "{}", message)?;
                Ok(())
            }
            Err(err) => self.report(err),
        }
    }

    fn view_transactions(&mut self) -> Result<()> {
        let transactions = self.service.transactions();
        if transactions.is_empty() {
            writeln!(self.output, "No transactions recorded.")?;
            return Ok(());
        }

        for tx in transactions {
            writeln!(self.output, "{}", transaction_line(tx, &self.config.currency))?;
        }
        Ok(())
    }

    fn view_summary(&mut self) -> Result<()> {
        let summary = self.service.summary();
        let currency = &self.config.currency;

        writeln!(self.output, "--- Financial Summary ---")?;
        writeln!(
            self.output,
            "Total Income: {}",
            format_money(summary.total_income, currency)
        )?;
        writeln!(
            self.output,
            "Total Expenses: {}",
            format_money(summary.total_expenses, currency)
        )?;
        writeln!(self.output, "Balance: {}", format_money(summary.balance, currency))?;
        Ok(())
    }

    fn show_income_expense_chart(&mut self) -> Result<()> {
        let chart = income_expense_chart(
            &self.service.summary(),
            &self.config.currency,
            self.config.chart_width,
        );
        writeln!(self.output, "{}", chart.trim_end())?;
        Ok(())
    }

    fn show_category_chart(&mut self) -> Result<()> {
        let chart = category_chart(
            &self.service.category_report(),
            &self.config.currency,
            self.config.chart_width,
        );
        writeln!(self.output, "{}", chart.trim_end())?;
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        let Some(path) = self.prompt("Enter export file path (.csv or .json): ")? else {
            return Ok(());
        };
        let path = path.trim();
        if path.is_empty() {
            writeln!(self.output, "Export cancelled.")?;
            return Ok(());
        }

        let result = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path))
            .and_then(|file| {
                Exporter::new(&*self.service).export(ExportFormat::from_path(path), file)
            });

        match result {
            Ok(count) => {
                info!(count, path, "Exported transactions");
                writeln!(self.output, "Exported {} transactions to {}", count, path)?;
            }
            Err(err) => {
                let err = AppError::Export(err);
                warn!("{:#}", err);
                writeln!(self.output, "{}", err)?;
            }
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.service.clear_history();
        writeln!(self.output, "All transaction history cleared successfully.")?;
        Ok(())
    }
}

fn transaction_line(tx: &Transaction, currency: &str) -> String {
    let mut line = format!(
        "[{}] {}: {}",
        tx.formatted_timestamp(),
        tx.category(),
        format_money(tx.amount(), currency)
    );
    if !tx.description().is_empty() {
        line.push_str(" - ");
        line.push_str(tx.description());
    }
    line
}
