//! Line-based codec for tokio.
//!
//! Reads CRLF- (or bare LF-) terminated lines and writes lines with CRLF
//! appended. Empty lines are skipped, so a buffer ending in a delimiter
//! never produces a blank command.

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::error;

/// Default maximum line length, delimiter included.
pub const MAX_LINE_LEN: usize = 8191;

/// P10 line codec.
///
/// Decoding errors consume the offending line; the caller may keep decoding
/// from the same buffer afterwards.
#[derive(Debug)]
pub struct P10Codec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
    /// Discarding an over-long line until its newline arrives
    discarding: bool,
}

impl P10Codec {
    /// Create a codec with the default line limit.
    pub fn new() -> Self {
        Self::with_max_len(MAX_LINE_LEN)
    }

    /// Create a codec with a custom line limit.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
            discarding: false,
        }
    }

    /// Whether the codec is dropping the tail of an over-long line.
    pub fn is_discarding(&self) -> bool {
        self.discarding
    }
}

impl Default for P10Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for P10Codec {
    type Item = String;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        loop {
            let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') else {
                if self.discarding {
                    src.clear();
                    self.next_index = 0;
                    return Ok(None);
                }

                // No complete line yet - remember where we stopped
                self.next_index = src.len();

                if src.len() > self.max_len {
                    let actual = src.len();
                    src.clear();
                    self.next_index = 0;
                    self.discarding = true;
                    return Err(error::ProtocolError::LineTooLong {
                        actual,
                        limit: self.max_len,
                    });
                }
                return Ok(None);
            };

            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if self.discarding {
                // Tail of a line already reported as too long
                self.discarding = false;
                continue;
            }

            if line.len() > self.max_len {
                return Err(error::ProtocolError::LineTooLong {
                    actual: line.len(),
                    limit: self.max_len,
                });
            }

            let mut end = line.len() - 1;
            if end > 0 && line[end - 1] == b'\r' {
                end -= 1;
            }
            if end == 0 {
                continue;
            }

            let data = std::str::from_utf8(&line[..end]).map_err(|e| {
                error::ProtocolError::InvalidUtf8 {
                    raw_line: line[..end].to_vec(),
                    byte_pos: e.valid_up_to(),
                }
            })?;
            return Ok(Some(data.to_string()));
        }
    }
}

impl<T: AsRef<str>> Encoder<T> for P10Codec {
    type Error = error::ProtocolError;

    fn encode(&mut self, line: T, dst: &mut BytesMut) -> error::Result<()> {
        let line = line.as_ref();
        dst.reserve(line.len() + 2);
        dst.put(line.as_bytes());
        dst.put(&b"\r\n"[..]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_complete_line() {
        let mut codec = P10Codec::new();
        let mut buf = BytesMut::from("AB G AB :12345\r\n");

        let result = codec.decode(&mut buf).unwrap();
        assert_eq!(result, Some("AB G AB :12345".to_string()));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_decode_multiple_lines_in_order() {
        let mut codec = P10Codec::new();
        let mut buf = BytesMut::from("AB G :1\r\nAB TI AA\r\nAB F AA\r\n");

        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("AB G :1"));
        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("AB TI AA"));
        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("AB F AA"));
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
    }

    #[test]
    fn test_decode_partial_line() {
        let mut codec = P10Codec::new();
        let mut buf = BytesMut::from("AB G ");

        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        buf.extend_from_slice(b":42\r\n");
        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("AB G :42"));
    }

    #[test]
    fn test_decode_skips_empty_lines() {
        let mut codec = P10Codec::new();
        let mut buf = BytesMut::from("\r\n\nAB Q :bye\r\n\r\n");

        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("AB Q :bye"));
        assert_eq!(codec.decode(&mut buf).unwrap(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_decode_bare_lf() {
        let mut codec = P10Codec::new();
        let mut buf = BytesMut::from("AB EB\n");
        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("AB EB"));
    }

    #[test]
    fn test_decode_too_long_then_recovers() {
        let mut codec = P10Codec::with_max_len(10);
        let mut buf = BytesMut::from("this is way too long\r\nAB Q\r\n");

        assert!(matches!(
            codec.decode(&mut buf),
            Err(error::ProtocolError::LineTooLong { .. })
        ));
        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("AB Q"));
    }

    #[test]
    fn test_decode_partial_too_long_discards_tail() {
        let mut codec = P10Codec::with_max_len(10);
        let mut buf = BytesMut::from("aaaaaaaaaaaaaaaa");

        assert!(matches!(
            codec.decode(&mut buf),
            Err(error::ProtocolError::LineTooLong { .. })
        ));
        assert!(codec.is_discarding());
        buf.extend_from_slice(b"tail\r\nAB Q\r\n");
        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("AB Q"));
        assert!(!codec.is_discarding());
    }

    #[test]
    fn test_decode_invalid_utf8_consumes_line() {
        let mut codec = P10Codec::new();
        let mut buf = BytesMut::from(&b"AB P #x :\xff\xfe\r\nAB Q\r\n"[..]);

        assert!(matches!(
            codec.decode(&mut buf),
            Err(error::ProtocolError::InvalidUtf8 { byte_pos: 9, .. })
        ));
        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("AB Q"));
    }

    #[test]
    fn test_encode_appends_crlf() {
        let mut codec = P10Codec::new();
        let mut buf = BytesMut::new();

        codec.encode("AA Z 12345", &mut buf).unwrap();
        assert_eq!(&buf[..], b"AA Z 12345\r\n");
    }
}
