use crate::utils::error::{UtilsError, Result};
use std::ops::Add;

pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Arithmetic mean of `values`.
///
/// An empty slice is an error rather than `NaN` or `0`.
pub fn average<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    if values.is_empty() {
        return Err(UtilsError::EmptyInput {
            operation: "average".to_string(),
        });
    }

    let total: f64 = values.iter().map(|&v| v.into()).sum();
    Ok(total / values.len() as f64)
}

pub fn double<T: Add<Output = T> + Copy>(x: T) -> T {
    x + x
}
