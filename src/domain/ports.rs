use crate::domain::model::{OutputFormat, TextRules};
use crate::utils::error::Result;

/// Where the numbers for a sequence operation come from.
pub trait NumberSource {
    fn read_numbers(&self) -> Result<Vec<f64>>;
}

pub trait ConfigProvider {
    fn output_format(&self) -> OutputFormat;
    fn precision(&self) -> Option<usize>;
    fn text_rules(&self) -> TextRules;
}
