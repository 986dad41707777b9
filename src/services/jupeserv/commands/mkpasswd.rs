//! MKPASSWD command handler for JupeServ.

use super::JupeServResult;
use crate::error::HandlerError;
use crate::security::password::hash_password;
use crate::services::ServiceEffect;
use crate::services::jupeserv::{Addressing, Request};
use crate::state::BotSession;

/// Handle MKPASSWD command.
///
/// `MKPASSWD <input>` replies with the digest to paste into `[bot.accounts]`.
pub fn handle_mkpasswd(
    bot: &BotSession,
    request: &Request<'_>,
    reply_effect: impl Fn(&str, &str) -> ServiceEffect,
) -> Result<JupeServResult, HandlerError> {
    if request.via.is_public() {
        return Err(HandlerError::NotPublic);
    }
    if request.via != Addressing::Secure {
        return Err(HandlerError::MustUseSecure);
    }
    let Some(input) = request.args().first().copied() else {
        return Err(HandlerError::NeedMoreArgs);
    };

    let digest = hash_password(&bot.config.salt, input);
    Ok(vec![reply_effect(request.sender, &format!("Hash: {}", digest))])
}
