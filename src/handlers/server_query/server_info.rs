//! INFO, TIME and MOTD handlers.
//!
//! Each answers the requesting numeric from our server numeric. Lines
//! without a sender have nobody to answer and are dropped.

use super::super::{Context, Handler, HandlerResult};
use p10_proto::{Line, Response};

/// Handler for INFO command.
pub struct InfoHandler;

impl Handler for InfoHandler {
    fn handle(&self, ctx: &mut Context<'_>, line: &Line<'_>) -> HandlerResult {
        let Some(requester) = line.sender else {
            return Ok(());
        };
        let identity = ctx.identity;

        ctx.send_reply(Response::RPL_INFO, requester, &[], &identity.name);
        ctx.send_reply(Response::RPL_INFO, requester, &[], &identity.description);
        ctx.send_reply(Response::RPL_ENDOFINFO, requester, &[], "End of /INFO list.");

        Ok(())
    }
}

/// Handler for TIME command.
///
/// `<numeric> TI <server>`
pub struct TimeHandler;

impl Handler for TimeHandler {
    fn handle(&self, ctx: &mut Context<'_>, line: &Line<'_>) -> HandlerResult {
        let Some(requester) = line.sender else {
            return Ok(());
        };
        let identity = ctx.identity;

        // RPL_TIME (391): <server> <epoch> <offset> :<local time>
        let now = chrono::Local::now();
        let epoch = now.timestamp().to_string();
        let time_string = now.format("%A %B %d %Y -- %H:%M:%S %z").to_string();

        ctx.send_reply(
            Response::RPL_TIME,
            requester,
            &[identity.name.as_str(), epoch.as_str(), "0"],
            &time_string,
        );

        Ok(())
    }
}

/// Handler for MOTD command. There is never a MOTD to serve.
pub struct MotdHandler;

impl Handler for MotdHandler {
    fn handle(&self, ctx: &mut Context<'_>, line: &Line<'_>) -> HandlerResult {
        let Some(requester) = line.sender else {
            return Ok(());
        };

        ctx.send_reply(Response::ERR_NOMOTD, requester, &[], "MOTD File is missing");

        Ok(())
    }
}
