//! Service effects and their application.

use p10_proto::Message;
use tracing::{debug, info};

use crate::handlers::Context;

/// Unified effect type returned by all service commands.
///
/// Services produce effects; the messaging handler applies them to the
/// session. Service logic never touches the auth store or the uplink
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceEffect {
    /// Send a line to a specific user (NOTICE or PRIVMSG reply).
    Reply {
        /// Numeric the reply is routed to.
        target: String,
        msg: Message,
    },

    /// Write a line to the uplink exactly as given.
    SendRaw { line: String },

    /// Mark a sender as authenticated (successful AUTH).
    Authenticate { target: String, account: String },
}

/// Apply a list of service effects sequentially.
pub fn apply_effects(ctx: &mut Context<'_>, effects: Vec<ServiceEffect>) {
    for effect in effects {
        apply_effect(ctx, effect);
    }
}

/// Apply one effect.
pub fn apply_effect(ctx: &mut Context<'_>, effect: ServiceEffect) {
    match effect {
        ServiceEffect::Reply { target, msg } => {
            debug!(numeric = %target, "Service reply");
            ctx.send(msg);
        }
        ServiceEffect::SendRaw { line } => {
            ctx.send(line);
        }
        ServiceEffect::Authenticate { target, account } => {
            if ctx.auth.insert(target.as_str()) {
                info!(numeric = %target, account = %account, "Sender authenticated");
            }
        }
    }
}
