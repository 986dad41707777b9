//! Server-to-server linking: handshake, burst and the uplink session.

pub mod burst;
pub mod handshake;
pub mod link;

pub use handshake::{HandshakeMachine, HandshakeState};
pub use link::{Link, READ_CHUNK, SessionSummary, connect, run_link};
