use serde::{Deserialize, Serialize};

/// One request to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Add { a: f64, b: f64 },
    Average { values: Vec<f64> },
    Double { value: f64 },
    CheckText { text: String },
    Hold { values: Vec<String> },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Average { .. } => "average",
            Operation::Double { .. } => "double",
            Operation::CheckText { .. } => "check-text",
            Operation::Hold { .. } => "hold",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationReport {
    pub operation: String,
    pub inputs: serde_json::Value,
    pub result: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const VALID: [&'static str; 2] = ["text", "json"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRules {
    pub min_length: usize,
    pub max_length: Option<usize>,
    pub trim: bool,
}

impl Default for TextRules {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: None,
            trim: true,
        }
    }
}
