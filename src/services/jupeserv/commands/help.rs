//! HELP command handler for JupeServ.

use super::JupeServResult;
use crate::services::jupeserv::{BotCommand, Request};
use crate::state::BotSession;

/// Handle HELP command. Available from anywhere.
pub fn handle_help(
    bot: &BotSession,
    request: &Request<'_>,
    reply_effects: impl Fn(&str, Vec<&str>) -> JupeServResult,
) -> JupeServResult {
    let usages: Vec<String> = BotCommand::ALL
        .iter()
        .map(|cmd| format!("{} {}", cmd.name(), cmd.usage(&bot.config.nick)))
        .collect();

    let mut lines = vec![
        "The following command(s) are available.",
        "----------------------------------------",
    ];
    lines.extend(usages.iter().map(String::as_str));
    reply_effects(request.sender, lines)
}
