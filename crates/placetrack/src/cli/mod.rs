//! Command-line interface for placetrack.
//!
//! This module provides the CLI structure and output rendering for the
//! `placetrack` binary.

mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AdminArgs, AdminCommand, ConfigCommand, ListArgs, RecordArgs, StudentArgs, StudentCommand,
};
pub use output::OutputFormat;

/// placetrack - Track student placements
///
/// Students browse and filter placement records; admins add, edit and
/// delete them. Records are kept in a local database.
#[derive(Debug, Parser)]
#[command(name = "placetrack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in as a student and browse placements
    Student(StudentArgs),

    /// Log in as an admin and manage placements
    Admin(AdminArgs),

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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "placetrack");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        use crate::logging::Verbosity;

        assert_eq!(
            parse(&["placetrack", "-q", "config", "path"]).verbosity(),
            Verbosity::Quiet
        );
        assert_eq!(
            parse(&["placetrack", "config", "path"]).verbosity(),
            Verbosity::Normal
        );
        assert_eq!(
            parse(&["placetrack", "-v", "config", "path"]).verbosity(),
            Verbosity::Verbose
        );
        assert_eq!(
            parse(&["placetrack", "-vv", "config", "path"]).verbosity(),
            Verbosity::Trace
        );
    }

    #[test]
    fn test_parse_student_list() {
        let cli = parse(&[
            "placetrack",
            "student",
            "--name",
            "Asha",
            "list",
            "--search",
            "acme",
            "--department",
            "CSE",
        ]);
        let Command::Student(args) = cli.command else {
            panic!("expected student command");
        };
        assert_eq!(args.name.as_deref(), Some("Asha"));
        let StudentCommand::List(list) = args.command else {
            panic!("expected list");
        };
        assert_eq!(list.search, "acme");
        assert_eq!(list.department, "CSE");
        assert_eq!(list.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_student_list_defaults() {
        let cli = parse(&["placetrack", "student", "list"]);
        let Command::Student(args) = cli.command else {
            panic!("expected student command");
        };
        let StudentCommand::List(list) = args.command else {
            panic!("expected list");
        };
        assert_eq!(list.search, "");
        assert_eq!(list.department, "all");
        assert_eq!(list.format, OutputFormat::default());
    }

    #[test]
    fn test_admin_list_format_default() {
        let cli = parse(&["placetrack", "admin", "list"]);
        assert!(matches!(
            cli.command,
            Command::Admin(AdminArgs {
                command: AdminCommand::List { format },
                ..
            }) if format == OutputFormat::default()
        ));
    }

    #[test]
    fn test_parse_admin_add() {
        let cli = parse(&[
            "placetrack",
            "admin",
            "add",
            "--student",
            "Asha Rao",
            "--department",
            "CSE",
            "--company",
            "Acme Corp",
            "--package",
            "12.5",
            "--date",
            "2024-03-01",
        ]);
        let Command::Admin(args) = cli.command else {
            panic!("expected admin command");
        };
        let AdminCommand::Add(record) = args.command else {
            panic!("expected add");
        };
        assert_eq!(record.company, "Acme Corp");
        assert_eq!(record.package, "12.5");
    }

    #[test]
    fn test_parse_admin_update_and_delete() {
        let cli = parse(&[
            "placetrack",
            "admin",
            "update",
            "1718000000000",
            "--student",
            "A",
            "--department",
            "D",
            "--company",
            "C",
            "--package",
            "1",
            "--date",
            "2024-01-01",
        ]);
        assert!(matches!(
            cli.command,
            Command::Admin(AdminArgs {
                command: AdminCommand::Update {
                    id: 1_718_000_000_000,
                    ..
                },
                ..
            })
        ));

        let cli = parse(&["placetrack", "admin", "delete", "42"]);
        assert!(matches!(
            cli.command,
            Command::Admin(AdminArgs {
                command: AdminCommand::Delete { id: 42 },
                ..
            })
        ));
    }

    #[test]
    fn test_admin_add_requires_fields() {
        let result = Cli::try_parse_from(["placetrack", "admin", "add", "--student", "A"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_with_config() {
        let cli = parse(&["placetrack", "-c", "/custom/config.toml", "config", "show"]);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
