//! P10 base-64 numerics.
//!
//! Servers, users and IPv4 addresses are carried on the wire as fixed-width
//! strings over the alphabet `A-Z a-z 0-9 [ ]`, most significant symbol first.
//!
//! # Reference
//! - <http://ircd.bircd.org/bewarep10.txt>

use crate::error::NumericError;

/// The 64-symbol numeric alphabet, index order.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789[]";

/// Width of a server numeric (`AB`).
pub const SERVER_WIDTH: usize = 2;
/// Width of a client numeric within its server (`AAA`).
pub const USER_WIDTH: usize = 3;
/// Width of a packed IPv4 address (`B]AAAB`).
pub const IP_WIDTH: usize = 6;

/// Largest server numeric representable in [`SERVER_WIDTH`] symbols.
pub const MAX_SERVER: u16 = 4095;
/// Largest client slot representable in [`USER_WIDTH`] symbols (`]]]`).
pub const MAX_USER: u32 = 262_143;

/// Index of `ch` in [`ALPHABET`].
#[inline]
fn symbol_index(ch: u8) -> Option<u64> {
    match ch {
        b'A'..=b'Z' => Some(u64::from(ch - b'A')),
        b'a'..=b'z' => Some(u64::from(ch - b'a') + 26),
        b'0'..=b'9' => Some(u64::from(ch - b'0') + 52),
        b'[' => Some(62),
        b']' => Some(63),
        _ => None,
    }
}

/// Decode a numeric string into the integer it encodes.
///
/// Every character must belong to [`ALPHABET`]; anything else is reported
/// rather than read as zero.
///
/// # Examples
///
/// ```
/// assert_eq!(p10_proto::numeric::decode("AB").unwrap(), 1);
/// assert_eq!(p10_proto::numeric::decode("]]]").unwrap(), 262_143);
/// assert!(p10_proto::numeric::decode("A-").is_err());
/// ```
pub fn decode(numeric: &str) -> Result<u64, NumericError> {
    numeric
        .char_indices()
        .try_fold(0u64, |acc, (pos, ch)| {
            let index = u8::try_from(ch)
                .ok()
                .and_then(symbol_index)
                .ok_or(NumericError::InvalidCharacter { ch, pos })?;
            acc.checked_mul(64)
                .map(|shifted| shifted | index)
                .ok_or(NumericError::Overflow {
                    numeric: numeric.to_string(),
                })
        })
}

/// Encode `value` as exactly `width` symbols, zero-padded with `A`.
///
/// Values that need more than `width * 6` bits are rejected instead of
/// being truncated.
///
/// # Examples
///
/// ```
/// assert_eq!(p10_proto::numeric::encode(0, 2).unwrap(), "AA");
/// assert_eq!(p10_proto::numeric::encode(2_130_706_433, 6).unwrap(), "B]AAAB");
/// assert!(p10_proto::numeric::encode(4096, 2).is_err());
/// ```
pub fn encode(value: u64, width: usize) -> Result<String, NumericError> {
    let bits = width.saturating_mul(6);
    if bits < 64 && value >> bits != 0 {
        return Err(NumericError::WidthTooSmall { value, width });
    }

    let mut out = vec![b'A'; width];
    let mut rest = value;
    for slot in out.iter_mut().rev() {
        *slot = ALPHABET[(rest & 63) as usize];
        rest >>= 6;
    }
    // Every byte comes from ALPHABET, which is ASCII.
    Ok(out.into_iter().map(char::from).collect())
}

/// A server numeric (0..=4095), two symbols on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServerNumeric(u16);

impl ServerNumeric {
    /// Create a server numeric, rejecting values above [`MAX_SERVER`].
    pub fn new(value: u16) -> Result<Self, NumericError> {
        if value > MAX_SERVER {
            return Err(NumericError::WidthTooSmall {
                value: u64::from(value),
                width: SERVER_WIDTH,
            });
        }
        Ok(Self(value))
    }

    /// Parse the two-symbol wire form.
    pub fn parse(numeric: &str) -> Result<Self, NumericError> {
        if numeric.len() != SERVER_WIDTH {
            return Err(NumericError::WrongLength {
                numeric: numeric.to_string(),
                expected: SERVER_WIDTH,
            });
        }
        // Two symbols never exceed 4095.
        Ok(Self(decode(numeric)? as u16))
    }

    /// The integer value.
    pub fn value(self) -> u16 {
        self.0
    }

    /// The client numeric for `slot` on this server.
    pub fn user(self, slot: u32) -> Result<UserNumeric, NumericError> {
        UserNumeric::new(self, slot)
    }
}

impl std::fmt::Display for ServerNumeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rest = self.0;
        let hi = ALPHABET[usize::from(rest >> 6) & 63];
        rest &= 63;
        let lo = ALPHABET[usize::from(rest)];
        write!(f, "{}{}", char::from(hi), char::from(lo))
    }
}

/// A full client numeric: server numeric followed by a three-symbol slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserNumeric {
    server: ServerNumeric,
    slot: u32,
}

impl UserNumeric {
    /// Create a client numeric, rejecting slots above [`MAX_USER`].
    pub fn new(server: ServerNumeric, slot: u32) -> Result<Self, NumericError> {
        if slot > MAX_USER {
            return Err(NumericError::WidthTooSmall {
                value: u64::from(slot),
                width: USER_WIDTH,
            });
        }
        Ok(Self { server, slot })
    }

    /// Parse the five-symbol wire form (`ABAAC`).
    pub fn parse(numeric: &str) -> Result<Self, NumericError> {
        let expected = SERVER_WIDTH + USER_WIDTH;
        if numeric.len() != expected || !numeric.is_ascii() {
            return Err(NumericError::WrongLength {
                numeric: numeric.to_string(),
                expected,
            });
        }
        let (server, slot) = numeric.split_at(SERVER_WIDTH);
        Ok(Self {
            server: ServerNumeric::parse(server)?,
            slot: decode(slot)? as u32,
        })
    }

    /// The server this client lives on.
    pub fn server(self) -> ServerNumeric {
        self.server
    }

    /// The client slot within its server.
    pub fn slot(self) -> u32 {
        self.slot
    }
}

impl std::fmt::Display for UserNumeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // slot <= MAX_USER, checked at construction
        let slot = encode(u64::from(self.slot), USER_WIDTH).map_err(|_| std::fmt::Error)?;
        write!(f, "{}{}", self.server, slot)
    }
}

/// Encode an IPv4 address the way N lines carry it.
pub fn encode_ipv4(addr: std::net::Ipv4Addr) -> String {
    let value = u64::from(u32::from(addr));
    let mut out = String::with_capacity(IP_WIDTH);
    for shift in (0..IP_WIDTH).rev() {
        out.push(char::from(ALPHABET[((value >> (shift * 6)) & 63) as usize]));
    }
    out
}
