//! Command handler registry and dispatch.
//!
//! The `Registry` maps each recognized command to its handler and keeps
//! per-session usage counts.

use super::context::{Context, Handler};
use crate::handlers::{
    connection::PingHandler,
    messaging::PrivmsgHandler,
    server_query::{InfoHandler, MotdHandler, TimeHandler},
    user_status::{KillHandler, QuitHandler},
};
use crate::telemetry::CommandTimer;
use p10_proto::{Command, Line};
use std::collections::HashMap;
use tracing::{trace, warn};

/// Registry of command handlers.
#[derive(Debug, Default)]
pub struct Registry {
    /// Command usage counters for the session summary.
    command_counts: HashMap<Command, u64>,
}

impl Registry {
    /// Create a new registry with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// The handler for `command`.
    pub fn handler_for(command: Command) -> &'static dyn Handler {
        match command {
            Command::Info => &InfoHandler,
            Command::Ping => &PingHandler,
            Command::Time => &TimeHandler,
            Command::Motd => &MotdHandler,
            Command::Privmsg => &PrivmsgHandler,
            Command::Kill => &KillHandler,
            Command::Quit => &QuitHandler,
        }
    }

    /// Parse and dispatch one raw line.
    ///
    /// Returns `false` for lines with no recognized command; those are
    /// expected during a burst and silently ignored. Handler failures are
    /// logged and never abort the session.
    pub fn dispatch(&mut self, ctx: &mut Context<'_>, raw: &str) -> bool {
        let Some(line) = Line::parse(raw) else {
            trace!(line = %raw, "Ignoring unhandled line");
            return false;
        };

        *self.command_counts.entry(line.command).or_default() += 1;
        let _timer = CommandTimer::new(line.command.name());

        if let Err(error) = Self::handler_for(line.command).handle(ctx, &line) {
            warn!(
                command = %line.command,
                code = error.error_code(),
                error = %error,
                "Handler failed"
            );
        }
        true
    }

    /// How many times `command` has been dispatched.
    pub fn command_count(&self, command: Command) -> u64 {
        self.command_counts.get(&command).copied().unwrap_or(0)
    }

    /// Total dispatched lines.
    pub fn total_dispatched(&self) -> u64 {
        self.command_counts.values().sum()
    }
}
