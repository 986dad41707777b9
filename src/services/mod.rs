//! Network services.
//!
//! Provides the JupeServ bot introduced during our burst.

pub mod base;
pub mod effect;
pub mod jupeserv;

pub use effect::{ServiceEffect, apply_effect, apply_effects};
pub use jupeserv::{Addressing, BotCommand, JupeServ, Request, route_service_message};
