//! Server query handlers: INFO, TIME, MOTD.

mod server_info;

pub use server_info::{InfoHandler, MotdHandler, TimeHandler};
