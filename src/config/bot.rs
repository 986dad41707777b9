//! Service bot configuration.

use serde::Deserialize;
use std::collections::HashMap;
use std::net::Ipv4Addr;

use super::defaults::{
    default_bot_channel, default_bot_ip, default_bot_nick, default_trigger, default_true,
};

/// How the bot answers the people talking to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyMethod {
    /// `O` (NOTICE)
    #[default]
    Notice,
    /// `P` (PRIVMSG)
    Privmsg,
}

impl ReplyMethod {
    /// The P10 token for this method.
    pub fn token(self) -> &'static str {
        match self {
            Self::Notice => "O",
            Self::Privmsg => "P",
        }
    }
}

/// Service bot block.
///
/// The bot is introduced during our burst and opped in its home channel.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Whether to introduce the bot at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Nickname, also the left half of the secure address.
    #[serde(default = "default_bot_nick")]
    pub nick: String,
    /// Username; defaults to the nickname.
    pub ident: Option<String>,
    /// Hostname; defaults to our server name.
    pub host: Option<String>,
    /// Real name; defaults to the nickname.
    pub realname: Option<String>,
    /// Address announced in the N line.
    #[serde(default = "default_bot_ip")]
    pub ip: Ipv4Addr,
    /// Home channel, burst with the bot opped. RAW audit lines go here.
    #[serde(default = "default_bot_channel")]
    pub channel: String,
    /// Command prefix required in channels.
    #[serde(default = "default_trigger")]
    pub trigger: char,
    /// NOTICE or PRIVMSG replies.
    #[serde(default)]
    pub reply_method: ReplyMethod,
    /// Salt mixed into password digests.
    pub salt: String,
    /// Lowercase account name -> lowercase hex SHA-512 of `(salt:password)`.
    /// Generate entries with `/msg <bot>@<server> MKPASSWD <password>`.
    #[serde(default)]
    pub accounts: HashMap<String, String>,
}

impl BotConfig {
    /// Username shown in the N line.
    pub fn ident(&self) -> &str {
        self.ident.as_deref().unwrap_or(&self.nick)
    }

    /// Real name shown in the N line.
    pub fn realname(&self) -> &str {
        self.realname.as_deref().unwrap_or(&self.nick)
    }

    /// Hostname shown in the N line.
    pub fn host<'a>(&'a self, server_name: &'a str) -> &'a str {
        self.host.as_deref().unwrap_or(server_name)
    }

    /// Stored digest for `account`, matched case-insensitively.
    pub fn account_digest(&self, account: &str) -> Option<&str> {
        self.accounts
            .get(&account.to_lowercase())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_identity() {
        let bot: BotConfig = toml::from_str(r#"salt = "pepper""#).unwrap();
        assert!(bot.enabled);
        assert_eq!(bot.nick, "JupeServ");
        assert_eq!(bot.ident(), "JupeServ");
        assert_eq!(bot.realname(), "JupeServ");
        assert_eq!(bot.host("jupe.example.net"), "jupe.example.net");
        assert_eq!(bot.ip, Ipv4Addr::LOCALHOST);
        assert_eq!(bot.channel, "#JupeServ");
        assert_eq!(bot.trigger, '?');
        assert_eq!(bot.reply_method, ReplyMethod::Notice);
        assert!(bot.accounts.is_empty());
    }

    #[test]
    fn test_reply_method_parsing() {
        let bot: BotConfig = toml::from_str(
            r#"
salt = "x"
reply_method = "privmsg"
"#,
        )
        .unwrap();
        assert_eq!(bot.reply_method.token(), "P");
        assert_eq!(ReplyMethod::Notice.token(), "O");
    }

    #[test]
    fn test_account_lookup_ignores_case() {
        let bot: BotConfig = toml::from_str(
            r#"
salt = "x"
[accounts]
admin = "abc"
"#,
        )
        .unwrap();
        assert_eq!(bot.account_digest("ADMIN"), Some("abc"));
        assert_eq!(bot.account_digest("admin"), Some("abc"));
        assert_eq!(bot.account_digest("nobody"), None);
    }
}
