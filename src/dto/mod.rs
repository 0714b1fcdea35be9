//! Data transfer objects for WebSocket communication.
//!
//! Session snapshots and the client/server message envelopes, serializable
//! via `serde`. Field names follow the camelCase wire schema.
mod request;
mod response;
mod snapshot;

pub use request::*;
pub use response::*;
pub use snapshot::*;
