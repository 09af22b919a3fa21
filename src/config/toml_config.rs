use crate::adapters::CsvFileSource;
use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, TextRules};
use crate::utils::error::{UtilsError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub text: TextRules,
    pub csv: CsvConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
    pub precision: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            precision: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    pub has_headers: bool,
    pub delimiter: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            has_headers: false,
            delimiter: ",".to_string(),
        }
    }
}

impl TomlConfig {
    /// Loads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UtilsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses config text after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UtilsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown names are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UtilsError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Checks every field; all sections are optional, so only present values can fail.
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_one_of("output.format", &self.output.format, &OutputFormat::VALID)?;

        if let Some(precision) = self.output.precision {
            validation::validate_range("output.precision", precision, 0, MAX_PRECISION)?;
        }

        if let Some(level) = &self.logging.level {
            validation::validate_non_empty_string("logging.level", level)?;
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        if let Some(max) = self.text.max_length {
            if max < self.text.min_length {
                return Err(UtilsError::InvalidConfigValueError {
                    field: "text.max_length".to_string(),
                    value: max.to_string(),
                    reason: format!(
                        "Value must be at least text.min_length ({})",
                        self.text.min_length
                    ),
                });
            }
        }

        validation::validate_single_ascii_char("csv.delimiter", &self.csv.delimiter)?;

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    /// Falls back to `,` when the configured delimiter is not a single ASCII character.
    pub fn csv_delimiter(&self) -> u8 {
        match validation::validate_single_ascii_char("csv.delimiter", &self.csv.delimiter) {
            Ok(delimiter) => delimiter,
            Err(e) => {
                tracing::warn!("{}; using ',' instead", e);
                b','
            }
        }
    }

    pub fn csv_source(&self, path: impl Into<PathBuf>) -> CsvFileSource {
        CsvFileSource::new(path)
            .with_headers(self.csv.has_headers)
            .with_delimiter(self.csv_delimiter())
    }
}

impl ConfigProvider for TomlConfig {
    fn output_format(&self) -> OutputFormat {
        OutputFormat::parse(&self.output.format).unwrap_or_default()
    }

    fn precision(&self) -> Option<usize> {
        self.output.precision
    }

    fn text_rules(&self) -> TextRules {
        self.text.clone()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
