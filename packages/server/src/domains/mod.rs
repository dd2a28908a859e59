// Business domains
pub mod directory;
pub mod dispatch;
pub mod hospitals;
pub mod intents;
