//! Inbound line tokenizing.
//!
//! P10 lines are space-delimited with no quoting. The first token is the
//! sender numeric, except for bootstrap lines that start with the command
//! itself. A parameter beginning with `:` runs to the end of the line.

use crate::command::Command;

/// Split a line on single ASCII spaces.
///
/// Consecutive spaces yield empty tokens; nothing is quoted or merged.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}

/// Find the sender and command in a tokenized line.
///
/// Returns `(sender, command, rest)`. When `tokens[1]` is a recognized
/// command the line has a sender; otherwise `tokens[0]` may itself be the
/// command. Lines matching neither form are not ours to handle.
pub fn identify<'a, 't>(
    tokens: &'t [&'a str],
) -> Option<(Option<&'a str>, Command, &'t [&'a str])> {
    if let [sender, second, rest @ ..] = tokens {
        if let Some(command) = Command::from_token(second) {
            return Some((Some(*sender), command, rest));
        }
    }
    let (first, rest) = tokens.split_first()?;
    Command::from_token(first).map(|command| (None, command, rest))
}

/// A recognized inbound line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line as received, without CRLF.
    pub raw: &'a str,
    /// Sender numeric, absent on bootstrap lines.
    pub sender: Option<&'a str>,
    /// The command.
    pub command: Command,
    /// Parameters after the command. A trailing `:` parameter is kept whole,
    /// colon included, with its inner spaces.
    pub args: Vec<&'a str>,
}

impl<'a> Line<'a> {
    /// Parse a raw line. Returns `None` for lines with no recognized command.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let tokens = tokenize(raw);
        let (sender, command, rest) = identify(&tokens)?;
        let consumed = tokens.len() - rest.len();
        let args = raw
            .splitn(consumed + 1, ' ')
            .nth(consumed)
            .map(split_params)
            .unwrap_or_default();

        Some(Self {
            raw,
            sender,
            command,
            args,
        })
    }

    /// Parameter `index`, verbatim.
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    /// The trailing `:` parameter without its colon.
    pub fn trailing(&self) -> Option<&'a str> {
        self.args.last().and_then(|last| last.strip_prefix(':'))
    }

    /// The last parameter with any leading colon removed.
    pub fn last_param(&self) -> Option<&'a str> {
        self.args
            .last()
            .map(|last| last.strip_prefix(':').unwrap_or(last))
    }
}

/// Split parameters, keeping the first `:`-prefixed one and everything
/// after it as a single parameter.
fn split_params(mut remaining: &str) -> Vec<&str> {
    let mut params = Vec::new();
    if remaining.is_empty() {
        return params;
    }
    loop {
        if remaining.starts_with(':') {
            params.push(remaining);
            break;
        }
        match remaining.split_once(' ') {
            Some((head, tail)) => {
                params.push(head);
                remaining = tail;
            }
            None => {
                params.push(remaining);
                break;
            }
        }
    }
    params
}
