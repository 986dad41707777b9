//! JupeServ - the jupe server's service bot.
//!
//! Handles:
//! - AUTH <account> <password> - Authenticate for RAW (secure address only)
//! - HELP - List commands
//! - MKPASSWD <input> - Produce a digest for the accounts table (secure address only)
//! - RAW <line> - Send a line to the uplink as-is (authenticated senders only)

mod commands;

use p10_proto::ChannelExt;
use std::fmt;
use tracing::debug;

use crate::handlers::Context;
use crate::services::apply_effects;
use crate::state::BotSession;

pub use commands::JupeServ;

/// How a PRIVMSG reached the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// Sent to a channel the bot sits in. Requires the trigger.
    Channel,
    /// Sent to the bot's numeric.
    Numeric,
    /// Sent to `<nick>@<server>`.
    Secure,
}

impl Addressing {
    /// Classify a PRIVMSG target. `None` means the message is not for us.
    pub fn classify(bot: &BotSession, target: &str) -> Option<Self> {
        if target.is_channel_name() {
            Some(Self::Channel)
        } else if bot.is_secure(target) {
            Some(Self::Secure)
        } else if bot.is_addressed(target) {
            Some(Self::Numeric)
        } else {
            None
        }
    }

    /// Whether the command was issued in public.
    pub fn is_public(self) -> bool {
        self == Self::Channel
    }
}

/// Commands understood by the bot, in HELP order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotCommand {
    Auth,
    Help,
    Mkpasswd,
    Raw,
}

impl BotCommand {
    /// Every command, in table order.
    pub const ALL: [BotCommand; 4] = [Self::Auth, Self::Help, Self::Mkpasswd, Self::Raw];

    /// Look up a case-folded command name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    /// Lowercase command name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Help => "help",
            Self::Mkpasswd => "mkpasswd",
            Self::Raw => "raw",
        }
    }

    /// Usage line shown by HELP. `nick` is the bot's nickname.
    pub fn usage(self, nick: &str) -> String {
        match self {
            Self::Auth => format!("- AUTH <account> <password> (Auth to {} to use RAW.)", nick),
            Self::Help => "- HELP (Lists all available commands.)".to_string(),
            Self::Mkpasswd => "- MKPASSWD <input> (Encrypts a string for password use.)".to_string(),
            Self::Raw => {
                "- RAW <args> (Send raw args. This requires knowledge of what you're doing.)"
                    .to_string()
            }
        }
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A message addressed to the bot, split into command and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request<'a> {
    /// Numeric of the user who sent it.
    pub sender: &'a str,
    /// The PRIVMSG target as received.
    pub target: &'a str,
    /// How the message reached us.
    pub via: Addressing,
    /// Command name, case-folded, trigger removed.
    pub command: String,
    /// Everything after the command word, verbatim.
    pub rest: &'a str,
}

impl<'a> Request<'a> {
    /// Split a message body into a request.
    ///
    /// Channel messages must start with `trigger`. Direct messages, to the
    /// plain numeric or the secure address, may carry it or not: `?help`
    /// and `help` both name HELP there, and the trigger is stripped before
    /// lookup. Returns `None` when the message is not a bot command.
    pub fn parse(
        sender: &'a str,
        target: &'a str,
        via: Addressing,
        trigger: char,
        text: &'a str,
    ) -> Option<Self> {
        let (word, rest) = text.split_once(' ').unwrap_or((text, ""));
        let word = word.trim_end_matches(['\r', '\n']);
        let word = match (via, word.strip_prefix(trigger)) {
            (_, Some(stripped)) => stripped,
            (Addressing::Channel, None) => return None,
            (_, None) => word,
        };
        if word.is_empty() {
            return None;
        }

        Some(Self {
            sender,
            target,
            via,
            command: word.to_lowercase(),
            rest,
        })
    }

    /// Arguments split on whitespace.
    pub fn args(&self) -> Vec<&'a str> {
        self.rest.split_whitespace().collect()
    }
}

/// Route a PRIVMSG to the bot, if it is addressed to it.
///
/// Applies all effects returned by JupeServ. Returns `false` when the bot is
/// disabled or the message is not for it.
pub fn route_service_message(ctx: &mut Context<'_>, sender: &str, target: &str, text: &str) -> bool {
    let identity = ctx.identity;
    let Some(bot) = identity.bot.as_ref() else {
        return false;
    };
    let Some(via) = Addressing::classify(bot, target) else {
        return false;
    };
    let Some(request) = Request::parse(sender, target, via, bot.config.trigger, text) else {
        debug!(sender = %sender, to = %target, "Ignoring non-command message");
        return false;
    };

    let jupeserv = JupeServ::new(bot, identity.server_numeric());
    let effects = jupeserv.handle_command(ctx.auth, &request);

    // Apply all effects using centralized function
    apply_effects(ctx, effects);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_command_table() {
        assert_eq!(BotCommand::from_name("auth"), Some(BotCommand::Auth));
        assert_eq!(BotCommand::from_name("raw"), Some(BotCommand::Raw));
        assert_eq!(BotCommand::from_name("RAW"), None);
        assert_eq!(BotCommand::from_name("kill"), None);
        let names: Vec<_> = BotCommand::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["auth", "help", "mkpasswd", "raw"]);
    }

    #[test]
    fn test_usage_mentions_bot_nick() {
        assert_eq!(
            BotCommand::Auth.usage("JupeServ"),
            "- AUTH <account> <password> (Auth to JupeServ to use RAW.)"
        );
    }

    #[test]
    fn test_request_channel_needs_trigger() {
        assert!(Request::parse("ABAAC", "#x", Addressing::Channel, '?', "help").is_none());
        let req = Request::parse("ABAAC", "#x", Addressing::Channel, '?', "?HELP").unwrap();
        assert_eq!(req.command, "help");
        assert_eq!(req.rest, "");
    }

    #[test]
    fn test_request_direct_trigger_optional() {
        let plain = Request::parse("ABAAC", "AAAAA", Addressing::Numeric, '?', "Raw AA P #x :hi  there").unwrap();
        assert_eq!(plain.command, "raw");
        assert_eq!(plain.rest, "AA P #x :hi  there");

        let triggered = Request::parse("ABAAC", "AAAAA", Addressing::Numeric, '?', "?raw x").unwrap();
        assert_eq!(triggered.command, "raw");
        assert_eq!(triggered.rest, "x");
    }

    #[test]
    fn test_request_args_split() {
        let req = Request::parse("ABAAC", "J@s", Addressing::Secure, '?', "auth admin  secret").unwrap();
        assert_eq!(req.args(), vec!["admin", "secret"]);
    }

    #[test]
    fn test_request_empty_body() {
        assert!(Request::parse("ABAAC", "AAAAA", Addressing::Numeric, '?', "").is_none());
        assert!(Request::parse("ABAAC", "AAAAA", Addressing::Numeric, '?', "?").is_none());
    }
}
