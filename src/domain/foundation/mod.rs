//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the PacFlix pricing domain.

mod errors;
mod money;
mod percentage;

pub use errors::{ErrorCode, ValidationError};
pub use money::Money;
pub use percentage::Percentage;
