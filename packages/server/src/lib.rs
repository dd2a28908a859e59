// Emergency Responder - API Core
//
// Classifies a free-text chat message into an emergency-number lookup,
// a hospital lookup, a canned intent reply, or a generated fallback answer.
//
// Reference data lives in domains/*, wired together by domains/dispatch.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
