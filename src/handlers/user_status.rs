//! KILL and QUIT handlers.
//!
//! Both only prune the auth store; a user who leaves the network must
//! authenticate again under whatever numeric they come back with.

use super::{Context, Handler, HandlerResult};
use crate::error::HandlerError;
use p10_proto::{Line, UserNumeric};
use tracing::{info, warn};

/// Forget `numeric` and report whether it was our own bot.
///
/// Only client numerics can be authenticated, so anything else is rejected.
fn forget(ctx: &mut Context<'_>, numeric: &str, reason: &'static str) -> HandlerResult {
    UserNumeric::parse(numeric)?;
    if ctx.auth.remove(numeric) {
        info!(numeric = %numeric, reason, "Authentication dropped");
    }
    let is_bot = ctx
        .identity
        .bot
        .as_ref()
        .is_some_and(|bot| bot.numeric_str() == numeric);
    if is_bot {
        warn!(numeric = %numeric, reason, "Service bot removed from the network");
    }
    Ok(())
}

/// Handler for KILL command.
///
/// `<numeric> D <target> :<reason>`
pub struct KillHandler;

impl Handler for KillHandler {
    fn handle(&self, ctx: &mut Context<'_>, line: &Line<'_>) -> HandlerResult {
        let target = line.arg(0).ok_or(HandlerError::NeedMoreArgs)?;
        forget(ctx, target, "kill")
    }
}

/// Handler for QUIT command.
///
/// `<numeric> Q :[reason]`
pub struct QuitHandler;

impl Handler for QuitHandler {
    fn handle(&self, ctx: &mut Context<'_>, line: &Line<'_>) -> HandlerResult {
        let sender = line.sender.ok_or(HandlerError::NeedMoreArgs)?;
        forget(ctx, sender, "quit")
    }
}
