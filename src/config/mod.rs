use clap::{Parser, Subcommand};

use crate::utils::error::{Result, ValidationError};
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Parser)]
#[command(name = "gradebook")]
#[command(about = "Manage a student roster stored as a CSV file")]
pub struct CliConfig {
    /// Path of the roster CSV file
    #[arg(long, default_value = "data/students.csv")]
    pub roster: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the roster as a table, optionally sorted
    List {
        /// Sort criterion: id, name or avg (anything else keeps file order)
        #[arg(long, default_value = "id")]
        sort: String,
    },

    /// Print group statistics
    Stats,

    /// Add a student to the roster
    Add {
        #[arg(long)]
        id: i64,

        #[arg(long)]
        name: String,

        /// Comma-separated grades, each 0-100
        #[arg(long, value_delimiter = ',')]
        grades: Vec<i64>,
    },

    /// Remove a student by id
    Remove {
        #[arg(long)]
        id: u32,
    },

    /// Replace a student's grades
    SetGrades {
        #[arg(long)]
        id: u32,

        /// Comma-separated grades, each 0-100
        #[arg(long, value_delimiter = ',')]
        grades: Vec<i64>,
    },

    /// Export the top N students to a report CSV
    ExportTop {
        #[arg(long, default_value = "3")]
        n: i64,

        #[arg(long, default_value = "top.csv")]
        output: String,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_path("roster", &self.roster)?;
        if let Command::ExportTop { output, .. } = &self.command {
            validation::validate_path("output", output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_roster_path() {
        let config = CliConfig::parse_from(["gradebook", "--roster", "", "stats"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_export_path() {
        let config =
            CliConfig::parse_from(["gradebook", "export-top", "--n", "2", "--output", ""]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["gradebook", "stats"]);
        assert_eq!(config.roster, "data/students.csv");
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }
}
