//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::controller::FormFields;

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Add command arguments.
///
/// Values are taken as text and validated exactly as the form's Add button does.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// The animal's name
    #[arg(short, long)]
    pub name: String,

    /// Date of birth (DD-MM-YYYY)
    #[arg(short, long, value_name = "DD-MM-YYYY")]
    pub dob: String,

    /// Weight in kilograms
    #[arg(short, long, allow_hyphen_values = true)]
    pub weight: String,

    /// Height in metres
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    pub height: String,

    /// Medical condition notes
    #[arg(short, long, default_value = "")]
    pub medical_condition: String,
}

impl AddCommand {
    /// Copy the arguments into form fields.
    #[must_use]
    pub fn to_fields(&self) -> FormFields {
        FormFields {
            name: self.name.clone(),
            date_of_birth: self.dob.clone(),
            weight: self.weight.clone(),
            height: self.height.clone(),
            medical_condition: self.medical_condition.clone(),
        }
    }
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Identifier of the record to delete
    pub id: i64,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output, one record per line
    Plain,
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}
