//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `destructions.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::EventWriter;
use crate::{DestructionRow, OutputResult, SummaryRow};

pub const DESTRUCTIONS_FILE: &str = "destructions.csv";
pub const SUMMARY_FILE: &str = "summary.csv";

/// Writes the event log to two CSV files.
pub struct CsvWriter {
    destructions: Writer<File>,
    summary:      Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both CSV files, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut destructions = Writer::from_path(dir.join(DESTRUCTIONS_FILE))?;
        destructions.write_record(["iteration", "city", "first_alien", "second_alien"])?;

        let mut summary = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summary.write_record(["iterations", "outcome", "moves", "max_cities", "destroyed", "remaining"])?;

        Ok(Self { destructions, summary, finished: false })
    }
}

impl EventWriter for CsvWriter {
    fn write_destruction(&mut self, row: &DestructionRow) -> OutputResult<()> {
        self.destructions.write_record(&[
            row.iteration.to_string(),
            row.city.clone(),
            row.first_alien.to_string(),
            row.second_alien.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.iterations.to_string(),
            row.outcome.to_string(),
            row.moves.to_string(),
            row.max_cities.to_string(),
            row.destroyed.to_string(),
            row.remaining.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.destructions.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
