//! Link upkeep handlers.

mod ping;

pub use ping::PingHandler;
