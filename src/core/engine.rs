use crate::core::arithmetic::{add, average, double};
use crate::core::holder::ValueHolder;
use crate::core::ConfigProvider;
use crate::domain::model::{Operation, OperationReport, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::check_text;
use serde_json::{json, Value};

const UNSET_MARKER: &str = "(unset)";

/// JSON has no inf or NaN, so non-finite results are kept as their display string.
fn number_value(n: f64) -> Value {
    if n.is_finite() {
        json!(n)
    } else {
        Value::String(n.to_string())
    }
}

fn number_list(values: &[f64]) -> Value {
    Value::Array(values.iter().copied().map(number_value).collect())
}

pub struct UtilsEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> UtilsEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn execute(&self, operation: Operation) -> Result<OperationReport> {
        let name = operation.name();
        tracing::debug!("Executing {}", name);

        let (inputs, result) = match operation {
            Operation::Add { a, b } => (
                json!({ "a": number_value(a), "b": number_value(b) }),
                number_value(add(a, b)),
            ),
            Operation::Average { values } => {
                tracing::debug!("Averaging {} values", values.len());
                let mean = average(values.as_slice())?;
                (json!({ "values": number_list(&values) }), number_value(mean))
            }
            Operation::Double { value } => (
                json!({ "value": number_value(value) }),
                number_value(double(value)),
            ),
            Operation::CheckText { text } => {
                let rules = self.config.text_rules();
                let valid = check_text(&text, &rules);
                (json!({ "text": text }), json!(valid))
            }
            Operation::Hold { values } => {
                let mut holder = ValueHolder::new();
                for value in &values {
                    holder.set(value.clone());
                    tracing::debug!("Holder now contains {:?}", holder.get());
                }
                let current = holder.get().cloned();
                (json!({ "values": values }), json!(current))
            }
        };

        tracing::debug!("{} -> {}", name, result);

        Ok(OperationReport {
            operation: name.to_string(),
            inputs,
            result,
        })
    }

    pub fn render(&self, report: &OperationReport) -> Result<String> {
        match self.config.output_format() {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => Ok(self.render_text(&report.result)),
        }
    }

    pub fn run(&self, operation: Operation) -> Result<String> {
        let report = self.execute(operation)?;
        self.render(&report)
    }

    fn render_text(&self, result: &Value) -> String {
        match result {
            Value::Null => UNSET_MARKER.to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::String(text) => text.clone(),
            Value::Number(number) => match (number.as_f64(), self.config.precision()) {
                (Some(n), Some(precision)) => format!("{:.*}", precision, n),
                (Some(n), None) => n.to_string(),
                (None, _) => number.to_string(),
            },
            other => other.to_string(),
        }
    }
}
