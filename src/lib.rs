pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{ArgsSource, CsvFileSource};
pub use crate::config::TomlConfig;
pub use crate::core::arithmetic::{add, average, double};
pub use crate::core::{engine::UtilsEngine, holder::ValueHolder, noop};
pub use crate::domain::model::{Operation, OperationReport, OutputFormat, TextRules};
pub use crate::utils::error::{Result, UtilsError};
pub use crate::utils::validation::{check_text, is_valid_text};
