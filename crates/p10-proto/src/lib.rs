//! # p10-proto
//!
//! Wire-level building blocks for the P10 server-to-server protocol spoken
//! by ircu-family daemons.
//!
//! ## Features
//!
//! - Base-64 numeric codec for server, user and IPv4 numerics
//! - Whitespace tokenizer and sender/command identification for inbound lines
//! - Outbound message formatting with trailing-argument handling
//! - Optional Tokio line codec (CRLF framing)
//!
//! ## Quick Start
//!
//! ```rust
//! use p10_proto::{numeric, Command, Line};
//!
//! assert_eq!(numeric::encode(482, 2).unwrap(), "Hi");
//! assert_eq!(numeric::decode("B]AAAB").unwrap(), 2_130_706_433);
//!
//! let line = Line::parse("AB P #channel :Hello there").unwrap();
//! assert_eq!(line.sender, Some("AB"));
//! assert_eq!(line.command, Command::Privmsg);
//! assert_eq!(line.trailing(), Some("Hello there"));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod chan;
#[cfg(feature = "tokio")]
pub mod codec;
pub mod command;
pub mod error;
pub mod line;
pub mod message;
pub mod numeric;
pub mod response;

pub use self::chan::ChannelExt;
#[cfg(feature = "tokio")]
pub use self::codec::{P10Codec, MAX_LINE_LEN};
pub use self::command::Command;
pub use self::error::{NumericError, ProtocolError};
pub use self::line::{tokenize, Line};
pub use self::message::Message;
pub use self::numeric::{ServerNumeric, UserNumeric};
pub use self::response::Response;
