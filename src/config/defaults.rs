//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use std::net::Ipv4Addr;

/// Returns `true` (for serde defaults).
pub fn default_true() -> bool {
    true
}

// =============================================================================
// Server Defaults
// =============================================================================

/// Flags on our SERVER line. `+s` marks a services server.
pub fn default_server_flags() -> String {
    "+s".to_string()
}

pub fn default_description() -> String {
    "A jupe server for ircu P10 protocol.".to_string()
}

// =============================================================================
// Uplink Defaults
// =============================================================================

pub fn default_uplink_port() -> u16 {
    4400
}

// =============================================================================
// Bot Defaults
// =============================================================================

pub fn default_bot_nick() -> String {
    "JupeServ".to_string()
}

pub fn default_bot_channel() -> String {
    "#JupeServ".to_string()
}

pub fn default_bot_ip() -> Ipv4Addr {
    Ipv4Addr::LOCALHOST
}

pub fn default_trigger() -> char {
    '?'
}
