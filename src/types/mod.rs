//! Shared types.

pub mod error;

pub use error::{QaError, QaResult};
