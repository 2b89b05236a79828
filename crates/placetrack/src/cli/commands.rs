//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::output::OutputFormat;
use crate::record::PlacementDraft;
use crate::student::ALL_DEPARTMENTS;

/// Student login and dashboard actions.
#[derive(Debug, Args)]
pub struct StudentArgs {
    /// Name to log in with (any value is accepted)
    #[arg(short, long, global = true)]
    pub name: Option<String>,

    /// Dashboard action
    #[command(subcommand)]
    pub command: StudentCommand,
}

/// Student dashboard actions.
#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    /// List placements, optionally filtered
    List(ListArgs),

    /// List the departments that have placements
    Departments,

    /// Show placement totals
    Stats {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Filters and format for the student list.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against student and company names
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact department, or "all"
    #[arg(short, long, default_value = ALL_DEPARTMENTS)]
    pub department: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Admin login and dashboard actions.
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Name to log in with (any value is accepted)
    #[arg(short, long, global = true)]
    pub name: Option<String>,

    /// Dashboard action
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin dashboard actions.
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List all placements
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Add a new placement
    Add(RecordArgs),

    /// Replace the fields of an existing placement
    Update {
        /// Identifier of the placement
        id: i64,

        /// New field values
        #[command(flatten)]
        record: RecordArgs,
    },

    /// Delete a placement
    Delete {
        /// Identifier of the placement
        id: i64,
    },

    /// Show placement totals
    Stats {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// The placement form fields.
#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Student name
    #[arg(long)]
    pub student: String,

    /// Department
    #[arg(long)]
    pub department: String,

    /// Company name
    #[arg(long)]
    pub company: String,

    /// Package in LPA
    #[arg(long)]
    pub package: String,

    /// Date placed (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
}

impl From<RecordArgs> for PlacementDraft {
    fn from(args: RecordArgs) -> Self {
        Self {
            student_name: args.student,
            department: args.department,
            company_name: args.company,
            package: args.package,
            date_placed: args.date,
        }
    }
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
