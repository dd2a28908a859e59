//! Dispatch domain - the ordered chain that turns a chat message into a reply.

pub mod dispatcher;
pub mod query;
pub mod stages;

pub use dispatcher::*;
pub use query::Query;
pub use stages::*;
