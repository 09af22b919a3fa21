use crate::domain::ports::NumberSource;
use crate::utils::error::{UtilsError, Result};
use crate::utils::validation::parse_number;
use std::path::PathBuf;

/// Numbers already parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct ArgsSource {
    values: Vec<f64>,
}

impl ArgsSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl NumberSource for ArgsSource {
    fn read_numbers(&self) -> Result<Vec<f64>> {
        Ok(self.values.clone())
    }
}

/// Every non-empty field of a CSV file, read row by row.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    has_headers: bool,
    delimiter: u8,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            has_headers: false,
            delimiter: b',',
        }
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl NumberSource for CsvFileSource {
    fn read_numbers(&self) -> Result<Vec<f64>> {
        tracing::debug!("Reading numbers from {}", self.path.display());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let mut numbers = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            for (column, field) in record.iter().enumerate() {
                if field.is_empty() {
                    continue;
                }
                let number = parse_number(field).map_err(|e| match e {
                    UtilsError::InvalidNumber { value, reason } => UtilsError::InvalidNumber {
                        value,
                        reason: format!("line {}, column {}: {}", line, column + 1, reason),
                    },
                    other => other,
                })?;
                numbers.push(number);
            }
        }

        tracing::debug!("Read {} numbers from {}", numbers.len(), self.path.display());
        Ok(numbers)
    }
}
