//! Outbound message construction.
//!
//! [`Message`] renders to a single protocol line without the CRLF
//! terminator; the codec appends it on write.

use std::fmt;

use crate::response::Response;

/// An outbound P10 line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Source numeric. Omitted on bootstrap lines (`PASS`, `SERVER`).
    pub source: Option<String>,
    /// Command or numeric reply token.
    pub command: String,
    /// Middle parameters. Must not contain spaces.
    pub params: Vec<String>,
    /// Free-text final parameter, written after a colon.
    pub trailing: Option<String>,
}

impl Message {
    /// Start a line with no source.
    pub fn bare(command: impl Into<String>) -> Self {
        Self {
            source: None,
            command: command.into(),
            params: Vec::new(),
            trailing: None,
        }
    }

    /// Start a line from `source`.
    pub fn new(source: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::bare(command)
        }
    }

    /// Start a numeric reply from `source` to `target`.
    pub fn response(source: impl Into<String>, response: Response, target: impl Into<String>) -> Self {
        Self::new(source, response.to_string()).arg(target)
    }

    /// Append a middle parameter.
    pub fn arg(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Set the trailing parameter.
    pub fn trailing(mut self, text: impl Into<String>) -> Self {
        self.trailing = Some(text.into());
        self
    }

    /// `<source> P <target> :<text>`
    pub fn privmsg(source: impl Into<String>, target: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(source, "P").arg(target).trailing(text)
    }

    /// `<source> O <target> :<text>`
    pub fn notice(source: impl Into<String>, target: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(source, "O").arg(target).trailing(text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "{} ", source)?;
        }
        f.write_str(&self.command)?;
        for param in &self.params {
            write!(f, " {}", param)?;
        }
        if let Some(trailing) = &self.trailing {
            write!(f, " :{}", trailing)?;
        }
        Ok(())
    }
}

impl From<Message> for String {
    fn from(msg: Message) -> Self {
        msg.to_string()
    }
}
