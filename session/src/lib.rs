//! Stratum Session
//!
//! The per-cycle coordinator. A session is opened against an immutable
//! root state, accepts mutation records while open, and derives each
//! entity's next branch by folding that entity's mutation subsequence
//! through the branch algebra. One session per logical cycle; a new
//! cycle opens a new session around the container's new root state.

mod error;
mod session;

pub use error::{SessionError, SessionResult};
pub use session::Session;
