//! Directory domain - emergency service numbers and keyword matching.

pub mod matcher;
pub mod models;

pub use matcher::*;
pub use models::*;
