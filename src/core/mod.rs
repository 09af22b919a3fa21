pub mod arithmetic;
pub mod engine;
pub mod holder;

pub use crate::domain::model::{Operation, OperationReport};
pub use crate::domain::ports::{ConfigProvider, NumberSource};
pub use crate::utils::error::Result;

/// Does nothing and has no observable effect.
pub fn noop() {}
