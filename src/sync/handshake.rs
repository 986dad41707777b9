//! Link handshake state machine.
//!
//! The bootstrap is fixed and unacknowledged: PASS, SERVER, our burst, then
//! END_OF_BURST. The uplink may start its own burst at any point, so the
//! caller writes every step before reading anything.

use p10_proto::Message;
use p10_proto::numeric::{MAX_USER, USER_WIDTH, encode};

use super::burst;
use crate::error::LinkError;
use crate::state::Identity;

/// Where we are in the bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    /// Nothing sent yet.
    Unconnected,
    /// PASS sent.
    Authenticating,
    /// SERVER sent.
    Introduced,
    /// Burst lines sent.
    Bursting,
    /// END_OF_BURST sent.
    Synced,
}

/// Drives the bootstrap one step at a time.
pub struct HandshakeMachine<'a> {
    pub state: HandshakeState,
    identity: &'a Identity,
    password: &'a str,
}

impl<'a> HandshakeMachine<'a> {
    pub fn new(identity: &'a Identity, password: &'a str) -> Self {
        Self {
            state: HandshakeState::Unconnected,
            identity,
            password,
        }
    }

    /// Lines for the current step, advancing to the next state.
    ///
    /// Returns `None` once the handshake is complete.
    pub fn step(&mut self) -> Result<Option<Vec<Message>>, LinkError> {
        let (lines, next) = match self.state {
            HandshakeState::Unconnected => (
                vec![Message::bare("PASS").trailing(self.password)],
                HandshakeState::Authenticating,
            ),
            HandshakeState::Authenticating => {
                (vec![self.server_line()?], HandshakeState::Introduced)
            }
            HandshakeState::Introduced => {
                (burst::generate_burst(self.identity), HandshakeState::Bursting)
            }
            HandshakeState::Bursting => (
                vec![Message::new(self.identity.server_numeric(), "EB")],
                HandshakeState::Synced,
            ),
            HandshakeState::Synced => return Ok(None),
        };
        self.state = next;
        Ok(Some(lines))
    }

    /// Every remaining line, in order.
    pub fn remaining_lines(&mut self) -> Result<Vec<Message>, LinkError> {
        let mut all = Vec::new();
        while let Some(lines) = self.step()? {
            all.extend(lines);
        }
        Ok(all)
    }

    /// `SERVER <name> 1 <epoch> <epoch> J10 <numeric><max users> <flags> :<description>`
    ///
    /// J10 marks a server still joining the network.
    fn server_line(&self) -> Result<Message, LinkError> {
        let identity = self.identity;
        let epoch = identity.epoch.to_string();
        let capacity = encode(u64::from(MAX_USER), USER_WIDTH)?;

        Ok(Message::bare("SERVER")
            .arg(identity.name.as_str())
            .arg("1")
            .arg(epoch.as_str())
            .arg(epoch)
            .arg("J10")
            .arg(format!("{}{}", identity.server_numeric(), capacity))
            .arg(identity.flags.as_str())
            .trailing(identity.description.as_str()))
    }
}
