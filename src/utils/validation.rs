use crate::domain::model::TextRules;
use crate::utils::error::{UtilsError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Default text predicate: true when the text has something other than whitespace.
pub fn is_valid_text(text: &str) -> bool {
    check_text(text, &TextRules::default())
}

pub fn check_text(text: &str, rules: &TextRules) -> bool {
    let candidate = if rules.trim { text.trim() } else { text };
    let length = candidate.chars().count();

    if length < rules.min_length {
        return false;
    }

    match rules.max_length {
        Some(max) => length <= max,
        None => true,
    }
}

pub fn parse_number(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(UtilsError::InvalidNumber {
            value: value.to_string(),
            reason: "value is empty".to_string(),
        });
    }

    trimmed
        .parse::<f64>()
        .map_err(|e| UtilsError::InvalidNumber {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(UtilsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UtilsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(UtilsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_single_ascii_char(field_name: &str, value: &str) -> Result<u8> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(UtilsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be exactly one ASCII character".to_string(),
        }),
    }
}
