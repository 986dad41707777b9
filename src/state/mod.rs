//! Session state.
//!
//! Contains the link identity (our server and bot numerics) and the set of
//! authenticated senders.

mod auth;
mod identity;

pub use auth::AuthStore;
pub use identity::{BotSession, Identity};
