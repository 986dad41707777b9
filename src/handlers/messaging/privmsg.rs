//! PRIVMSG handler.
//!
//! Only messages for the service bot are acted on; we relay nothing.

use super::super::{Context, Handler, HandlerResult};
use crate::services::route_service_message;
use p10_proto::Line;
use tracing::trace;

/// Handler for PRIVMSG command.
///
/// `<numeric> P <target> :<text>`
pub struct PrivmsgHandler;

impl Handler for PrivmsgHandler {
    fn handle(&self, ctx: &mut Context<'_>, line: &Line<'_>) -> HandlerResult {
        let (Some(sender), Some(target), Some(text)) = (line.sender, line.arg(0), line.arg(1)) else {
            return Ok(());
        };
        let text = text.strip_prefix(':').unwrap_or(text);

        if !route_service_message(ctx, sender, target, text) {
            trace!(sender = %sender, to = %target, "Message not for us");
        }

        Ok(())
    }
}
