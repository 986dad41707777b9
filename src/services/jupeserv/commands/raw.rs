//! RAW command handler for JupeServ.

use p10_proto::Message;
use tracing::info;

use super::JupeServResult;
use crate::error::HandlerError;
use crate::services::ServiceEffect;
use crate::services::jupeserv::Request;
use crate::state::{AuthStore, BotSession};

/// Handle RAW command.
///
/// `RAW <line>` writes the line to the uplink untouched. Unless it was
/// issued in a channel, an audit copy naming the sender goes to the bot's
/// home channel from our server numeric.
pub fn handle_raw(
    bot: &BotSession,
    server_numeric: &str,
    auth: &AuthStore,
    request: &Request<'_>,
    reply_effect: impl Fn(&str, &str) -> ServiceEffect,
) -> Result<JupeServResult, HandlerError> {
    if !auth.contains(request.sender) {
        return Err(HandlerError::AccessDenied);
    }
    let line = request.rest.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Err(HandlerError::NeedMoreArgs);
    }

    info!(numeric = %request.sender, line = %line, "RAW issued");
    let mut effects = vec![ServiceEffect::SendRaw {
        line: line.to_string(),
    }];
    if !request.via.is_public() {
        let audit = Message::privmsg(
            server_numeric,
            bot.config.channel.as_str(),
            format!("[{}] {}", request.sender, line),
        );
        effects.push(ServiceEffect::SendRaw {
            line: audit.to_string(),
        });
    }
    effects.push(reply_effect(request.sender, "Done."));
    Ok(effects)
}
