//! Numeric reply codes sent by this library's users.
//!
//! Only the replies a jupe server answers with are listed.
//!
//! # Reference
//! - RFC 2812 Section 5

#![allow(non_camel_case_types)]

use std::fmt;

/// IRC numeric reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Response {
    /// 371 - INFO line
    RPL_INFO = 371,
    /// 374 - End of INFO
    RPL_ENDOFINFO = 374,
    /// 391 - Server time
    RPL_TIME = 391,
    /// 422 - No MOTD available
    ERR_NOMOTD = 422,
}

impl Response {
    /// Numeric value of the reply.
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Whether this is an error reply (400-599).
    #[inline]
    pub fn is_error(self) -> bool {
        (400..600).contains(&self.code())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}
