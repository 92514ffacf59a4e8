//! Command-line interface for zoo-manager.
//!
//! This module provides the CLI structure for the `zoo` binary and the text
//! renderings its subcommands print.

mod commands;

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::record::{AnimalRecord, TableRow};

pub use commands::{
    AddCommand, ConfigCommand, DeleteCommand, ListCommand, OutputFormat, StatusCommand,
};

/// zoo - Keep records of the animals in your care
///
/// Opens the record window when run without a subcommand. The subcommands
/// work on the same database from a terminal.
#[derive(Debug, Parser)]
#[command(name = "zoo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the record window (the default)
    Gui,

    /// List every stored animal
    List(ListCommand),

    /// Add an animal
    Add(AddCommand),

    /// Delete an animal by identifier
    Delete(DeleteCommand),

    /// Show database location and record count
    Status(StatusCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

/// Render records for `zoo list`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_records(records: &[AnimalRecord], format: OutputFormat) -> Result<String> {
    let rows: Vec<TableRow> = records.iter().map(TableRow::from).collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Plain => Ok(rows
            .iter()
            .map(|row| row.cells().join("\t"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => Ok(render_table(&rows)),
    }
}

/// Lay rows out in aligned columns under the table headings.
fn render_table(rows: &[TableRow]) -> String {
    let cells: Vec<[String; 6]> = rows.iter().map(TableRow::cells).collect();

    let mut widths = TableRow::COLUMNS.map(|heading| heading.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let headings = TableRow::COLUMNS.map(String::from);
    push_line(&mut out, &headings, &widths);
    let rule = widths.map(|width| "-".repeat(width));
    push_line(&mut out, &rule, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out.truncate(out.trim_end().len());
    out
}

fn push_line(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}
