//! Hospitals domain - the hospital table and location lookup.

pub mod locator;
pub mod models;

pub use locator::*;
pub use models::*;
