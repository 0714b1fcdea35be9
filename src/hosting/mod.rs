//! Multiplayer hosting.
//!
//! - [`Lobby`]: Concurrent registry of sessions and who sits where
//! - [`Notice`]: Outbound message plus its recipients
//! - [`Switchboard`]: Per-connection outbound queues
//! - [`Sweeper`]: Periodic eviction of abandoned sessions
//! - [`Client`]: Routes one participant's requests into the lobby
//! - `Server`: actix-web + WebSocket front end (feature `server`)
mod client;
mod config;
mod lobby;
mod notice;
mod sweeper;
mod switchboard;

#[cfg(feature = "server")]
mod server;

pub use client::*;
pub use config::*;
pub use lobby::*;
pub use notice::*;
pub use sweeper::*;
pub use switchboard::*;

#[cfg(feature = "server")]
pub use server::*;
