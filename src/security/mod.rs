//! Security module for jupeserv.
//!
//! Provides the salted password digests behind AUTH and MKPASSWD.

pub mod password;

pub use password::{hash_password, verify_password};
