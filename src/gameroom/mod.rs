//! Online match state.
//!
//! - [`Session`]: One match: game, participants, lifecycle, rematch votes
//! - [`Status`]: Closed set of lifecycle states
//! - [`Participant`]: Marker type for connection identities
mod participant;
mod session;
mod status;

pub use participant::*;
pub use session::*;
pub use status::*;
