//! PING handler.

use super::super::{Context, Handler, HandlerResult};
use crate::error::HandlerError;
use p10_proto::{Line, Message};

/// Handler for PING command.
pub struct PingHandler;

impl Handler for PingHandler {
    fn handle(&self, ctx: &mut Context<'_>, line: &Line<'_>) -> HandlerResult {
        // <numeric> G [:]<arg>
        let arg = line.last_param().ok_or(HandlerError::NeedMoreArgs)?;

        let pong = Message::new(ctx.server_numeric(), "Z").arg(arg);
        ctx.send(pong);

        Ok(())
    }
}
