//! P10 command handlers.
//!
//! This module contains the Handler trait and command registry for
//! dispatching lines from the uplink to the appropriate handler.
//!
//! Handlers receive a borrowed [`Line`](p10_proto::Line) and queue their
//! replies on the [`Context`]; the link loop writes them out in order once
//! the line has been fully handled.

mod connection;
mod core;
mod messaging;
mod server_query;
mod user_status;

pub use connection::PingHandler;
pub use self::core::{Context, Handler, HandlerResult, Registry};
pub use messaging::PrivmsgHandler;
pub use server_query::{InfoHandler, MotdHandler, TimeHandler};
pub use user_status::{KillHandler, QuitHandler};
