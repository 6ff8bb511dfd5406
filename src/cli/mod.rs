pub mod charts;
pub mod menu;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::application::TrackerService;
use crate::domain::Clock;

pub use menu::{LoopControl, Menu, MenuConfig};

/// Tally - Personal Finance Tracker
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "An interactive personal finance tracker for income and expenses")]
#[command(version)]
pub struct Cli {
    /// Currency symbol used when displaying amounts
    #[arg(short, long, default_value = "$")]
    pub currency: String,

    /// Width of chart bars, in characters
    #[arg(long, default_value_t = charts::DEFAULT_CHART_WIDTH)]
    pub chart_width: usize,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn menu_config(&self) -> MenuConfig {
        MenuConfig {
            currency: self.currency.clone(),
            chart_width: self.chart_width.max(1),
        }
    }

    /// Start a fresh session on stdin/stdout.
    pub fn run(self) -> Result<()> {
        let mut service = TrackerService::new();
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_session(&mut service, stdin.lock(), stdout.lock(), self.menu_config())
    }
}

/// Drive one interactive session over arbitrary input/output.
pub fn run_session<C: Clock, R: BufRead, W: Write>(
    service: &mut TrackerService<C>,
    input: R,
    output: W,
    config: MenuConfig,
) -> Result<()> {
    info!(currency = %config.currency, "Starting tracker session");
    Menu::new(service, input, output, config).run()?;
    info!(
        transactions = service.transactions().len(),
        "Tracker session ended"
    );
    Ok(())
}
