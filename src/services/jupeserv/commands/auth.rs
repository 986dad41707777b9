//! AUTH command handler for JupeServ.

use tracing::info;

use super::JupeServResult;
use crate::error::HandlerError;
use crate::security::password::verify_password;
use crate::services::ServiceEffect;
use crate::services::jupeserv::{Addressing, Request};
use crate::state::{AuthStore, BotSession};
use p10_proto::UserNumeric;

/// Handle AUTH command.
///
/// `AUTH <account> <password>`, accepted only through the secure address.
pub fn handle_auth(
    bot: &BotSession,
    auth: &AuthStore,
    request: &Request<'_>,
    reply_effect: impl Fn(&str, &str) -> ServiceEffect,
) -> Result<JupeServResult, HandlerError> {
    if request.via.is_public() {
        return Err(HandlerError::NotPublic);
    }
    if request.via != Addressing::Secure {
        return Err(HandlerError::MustUseSecure);
    }
    let args = request.args();
    let &[account, password, ..] = args.as_slice() else {
        return Err(HandlerError::NeedMoreArgs);
    };
    if auth.contains(request.sender) {
        return Err(HandlerError::AlreadyAuthed);
    }
    // KILL and QUIT can only prune client numerics.
    UserNumeric::parse(request.sender)?;

    let account = account.to_lowercase();
    let stored = bot
        .config
        .account_digest(&account)
        .ok_or_else(|| HandlerError::NoSuchAccount(account.clone()))?;
    if !verify_password(&bot.config.salt, password, stored) {
        return Err(HandlerError::IncorrectPassword(account));
    }

    info!(numeric = %request.sender, account = %account, "AUTH accepted");
    Ok(vec![
        ServiceEffect::Authenticate {
            target: request.sender.to_string(),
            account,
        },
        reply_effect(request.sender, "You are now authed."),
    ])
}
