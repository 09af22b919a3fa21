use crate::adapters::ArgsSource;
use crate::config::toml_config::TomlConfig;
use crate::core::{NumberSource, Operation};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-utils")]
#[command(about = "Small numeric and text utilities")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override output format from config
    #[arg(long, global = true, value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Override decimal precision from config
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add two numbers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Average a sequence of numbers
    Average {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Also read numbers from a CSV file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Double a number
    Double {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    /// Check whether text satisfies the configured text rules
    CheckText { text: String },
    /// Store each value in turn and print what the holder ends up with
    Hold {
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
}

impl CliConfig {
    /// Loads the config file (or defaults), applies command-line overrides, and validates.
    pub fn resolve_settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(format) = &self.format {
            settings.output.format = format.clone();
        }
        if let Some(precision) = self.precision {
            settings.output.precision = Some(precision);
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn to_operation(&self, settings: &TomlConfig) -> Result<Operation> {
        let operation = match &self.command {
            Command::Add { a, b } => Operation::Add { a: *a, b: *b },
            Command::Average { values, file } => {
                let mut numbers = ArgsSource::new(values.clone()).read_numbers()?;
                if let Some(path) = file {
                    numbers.extend(settings.csv_source(path).read_numbers()?);
                }
                Operation::Average { values: numbers }
            }
            Command::Double { x } => Operation::Double { value: *x },
            Command::CheckText { text } => Operation::CheckText { text: text.clone() },
            Command::Hold { values } => Operation::Hold {
                values: values.clone(),
            },
        };
        Ok(operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use crate::domain::model::OutputFormat;

    #[test]
    fn test_parse_add_with_negative_numbers() {
        let cli = CliConfig::try_parse_from(["small-utils", "add", "-2", "3.5"]).unwrap();
        let op = cli.to_operation(&TomlConfig::default()).unwrap();
        assert_eq!(op, Operation::Add { a: -2.0, b: 3.5 });
    }

    #[test]
    fn test_overrides_beat_defaults() {
        let cli = CliConfig::try_parse_from([
            "small-utils",
            "--format",
            "json",
            "--precision",
            "4",
            "double",
            "1",
        ])
        .unwrap();
        let settings = cli.resolve_settings().unwrap();
        assert_eq!(settings.output_format(), OutputFormat::Json);
        assert_eq!(settings.precision(), Some(4));
    }

    #[test]
    fn test_out_of_range_precision_fails_validation() {
        let cli =
            CliConfig::try_parse_from(["small-utils", "--precision", "99", "double", "1"]).unwrap();
        assert!(cli.resolve_settings().is_err());
    }

    #[test]
    fn test_unknown_format_rejected_by_parser() {
        let parsed = CliConfig::try_parse_from(["small-utils", "--format", "xml", "add", "1", "2"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_hold_accepts_hyphen_values() {
        let cli = CliConfig::try_parse_from(["small-utils", "hold", "-5", "-x"]).unwrap();
        let op = cli.to_operation(&TomlConfig::default()).unwrap();
        assert_eq!(
            op,
            Operation::Hold {
                values: vec!["-5".to_string(), "-x".to_string()],
            }
        );
    }

    #[test]
    fn test_average_without_inputs_is_empty_sequence() {
        let cli = CliConfig::try_parse_from(["small-utils", "average"]).unwrap();
        let op = cli.to_operation(&TomlConfig::default()).unwrap();
        assert_eq!(op, Operation::Average { values: vec![] });
    }
}
