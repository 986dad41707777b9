//! Telemetry utilities for command timing and span construction.

use std::time::Instant;
use tracing::trace;

/// Guard for timing command dispatch.
///
/// Logs the elapsed time at trace level when dropped.
pub struct CommandTimer {
    command: &'static str,
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        let micros = self.start.elapsed().as_micros();
        trace!(command = self.command, micros = micros as u64, "Command dispatched");
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span for the uplink session.
    pub fn link(numeric: &str, uplink: &str) -> Span {
        info_span!("link", numeric = %numeric, uplink = %uplink)
    }

    /// Create a span for a command execution.
    pub fn command(name: &str, source: &str, target: Option<&str>) -> Span {
        if let Some(target) = target {
            info_span!("command", name = %name, source = %source, target = %target)
        } else {
            info_span!("command", name = %name, source = %source)
        }
    }
}
