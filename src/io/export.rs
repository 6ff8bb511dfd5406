use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::Write;

use crate::application::{Summary, TrackerService};
use crate::domain::{format_cents, Clock, Transaction};

/// Full dump of the current session.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub version: String,
    pub exported_at: DateTime<Local>,
    pub summary: Summary,
    pub transactions: Vec<Transaction>,
}

/// Output format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// `.json` selects JSON; anything else is CSV.
    pub fn from_path(path: &str) -> Self {
        if path.trim().to_ascii_lowercase().ends_with(".json") {
            ExportFormat::Json
        } else {
            ExportFormat::Csv
        }
    }
}

/// Exporter for converting ledger data to various formats
pub struct Exporter<'a, C: Clock> {
    service: &'a TrackerService<C>,
}

impl<'a, C: Clock> Exporter<'a, C> {
    pub fn new(service: &'a TrackerService<C>) -> Self {
        Self { service }
    }

    /// Export transactions to CSV, in ledger order. Returns the row count.
    pub fn export_transactions_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "id",
            "timestamp",
            "kind",
            "category",
            "amount",
            "description",
        ])?;

        let mut count = 0;
        for transaction in self.service.transactions() {
            csv_writer.write_record([
                transaction.id().to_string(),
                transaction.formatted_timestamp(),
                transaction.kind().to_string(),
                transaction.category().to_string(),
                format_cents(transaction.amount()),
                transaction.description().to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export summary plus transactions as pretty-printed JSON.
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<Snapshot> {
        let snapshot = Snapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: self.service.ledger().clock().now(),
            summary: self.service.summary(),
            transactions: self.service.transactions().to_vec(),
        };

        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(snapshot)
    }

    /// Export in the given format. Returns the number of transactions written.
    pub fn export<W: Write>(&self, format: ExportFormat, writer: W) -> Result<usize> {
        match format {
            ExportFormat::Csv => self.export_transactions_csv(writer),
            ExportFormat::Json => Ok(self.export_json(writer)?.transactions.len()),
        }
    }
}
