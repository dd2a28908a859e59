// Common types and utilities shared across the application

pub mod errors;
pub mod text;

pub use errors::{GenerationError, ResponderError, Result};
