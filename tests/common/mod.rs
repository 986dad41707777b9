//! Integration test common infrastructure.
//!
//! Provides a fake hub that jupeserv links to, and helpers for asserting
//! on the lines it receives.

pub mod uplink;

#[allow(unused_imports)]
pub use uplink::{FakeUplink, spawn_link, test_config};
