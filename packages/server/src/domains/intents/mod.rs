//! Intents domain - canned replies selected by similarity to example phrases.

pub mod classifier;
pub mod models;
pub mod vectorizer;

pub use classifier::*;
pub use models::*;
pub use vectorizer::TfIdfVectorizer;
