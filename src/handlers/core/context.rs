//! Command handler context and core types.
//!
//! Defines the `Context<'a>` struct passed to all handlers and the `Handler`
//! trait they implement.

use crate::error::HandlerError;
use crate::state::{AuthStore, Identity};
use p10_proto::{Line, Message, Response};

/// Result type for server command handlers.
pub type HandlerResult = Result<(), HandlerError>;

/// Handler context passed to each command handler.
///
/// Holds the session state a handler may read or mutate and collects the
/// lines it wants sent, in order.
pub struct Context<'a> {
    /// Our server and bot identity.
    pub identity: &'a Identity,
    /// Authenticated senders for this session.
    pub auth: &'a mut AuthStore,
    outbox: Vec<String>,
}

impl<'a> Context<'a> {
    /// Create a new context with an empty outbox.
    pub fn new(identity: &'a Identity, auth: &'a mut AuthStore) -> Self {
        Self {
            identity,
            auth,
            outbox: Vec::new(),
        }
    }

    /// Our two-character server numeric.
    pub fn server_numeric(&self) -> String {
        self.identity.server_numeric()
    }

    /// Queue a line for the uplink.
    pub fn send(&mut self, line: impl Into<String>) {
        self.outbox.push(line.into());
    }

    /// Build and queue a numeric reply from our server in one call.
    pub fn send_reply(&mut self, response: Response, target: &str, params: &[&str], text: &str) {
        let mut msg = Message::response(self.server_numeric(), response, target);
        for param in params {
            msg = msg.arg(*param);
        }
        self.send(msg.trailing(text));
    }

    /// Lines queued so far.
    pub fn outbox(&self) -> &[String] {
        &self.outbox
    }

    /// Take the queued lines, leaving the outbox empty.
    pub fn take_outbox(&mut self) -> Vec<String> {
        std::mem::take(&mut self.outbox)
    }
}

/// Trait implemented by every server command handler.
pub trait Handler: Send + Sync {
    /// Handle one parsed line.
    fn handle(&self, ctx: &mut Context<'_>, line: &Line<'_>) -> HandlerResult;
}
