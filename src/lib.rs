//! jupeserv - a P10 jupe server with an embedded service bot.
//!
//! Links to an ircu-family hub as a leaf server, introduces the JupeServ
//! bot in its home channel, and answers the handful of server queries a
//! leaf is expected to answer.

pub mod config;
pub mod error;
pub mod handlers;
pub mod security;
pub mod services;
pub mod state;
pub mod sync;
pub mod telemetry;

pub use config::Config;
pub use error::{HandlerError, LinkError};
pub use sync::{Link, SessionSummary, run_link};
