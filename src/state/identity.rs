//! Link identity: who we claim to be on the network.

use p10_proto::numeric::encode_ipv4;
use p10_proto::{NumericError, ServerNumeric, UserNumeric};

use crate::config::{BotConfig, Config};

/// Slot of the service bot under our server numeric.
const BOT_SLOT: u32 = 0;

/// Our server identity for one link session.
///
/// Numerics are encoded once here so handlers can format lines without
/// re-checking widths.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Server name announced in SERVER.
    pub name: String,
    /// Server description, also the INFO text.
    pub description: String,
    /// SERVER line flags.
    pub flags: String,
    /// Our server numeric.
    pub numeric: ServerNumeric,
    /// Link timestamp, used for SERVER, N and B lines.
    pub epoch: i64,
    /// The service bot, when enabled.
    pub bot: Option<BotSession>,
}

/// The introduced service bot.
#[derive(Debug, Clone)]
pub struct BotSession {
    /// Full user numeric (server numeric plus slot).
    pub numeric: UserNumeric,
    /// `<nick>@<server>`, the address privileged commands must use.
    pub secure_addr: String,
    /// Encoded IPv4 address for the N line.
    pub encoded_ip: String,
    /// Bot settings.
    pub config: BotConfig,
}

impl Identity {
    /// Build the identity from configuration.
    pub fn from_config(config: &Config, epoch: i64) -> Result<Self, NumericError> {
        let numeric = ServerNumeric::new(config.server.numeric)?;
        let bot = config
            .enabled_bot()
            .map(|bot| BotSession::new(bot, numeric, &config.server.name))
            .transpose()?;

        Ok(Self {
            name: config.server.name.clone(),
            description: config.server.description.clone(),
            flags: config.server.flags.clone(),
            numeric,
            epoch,
            bot,
        })
    }

    /// Our two-character server numeric.
    pub fn server_numeric(&self) -> String {
        self.numeric.to_string()
    }
}

impl BotSession {
    fn new(config: &BotConfig, server: ServerNumeric, server_name: &str) -> Result<Self, NumericError> {
        Ok(Self {
            numeric: server.user(BOT_SLOT)?,
            secure_addr: format!("{}@{}", config.nick, server_name),
            encoded_ip: encode_ipv4(config.ip),
            config: config.clone(),
        })
    }

    /// The bot's five-character numeric.
    pub fn numeric_str(&self) -> String {
        self.numeric.to_string()
    }

    /// Whether a PRIVMSG target addresses the bot directly.
    pub fn is_addressed(&self, target: &str) -> bool {
        target == self.numeric_str() || target.eq_ignore_ascii_case(&self.secure_addr)
    }

    /// Whether a PRIVMSG target is the secure address.
    pub fn is_secure(&self, target: &str) -> bool {
        target.eq_ignore_ascii_case(&self.secure_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(bot_enabled: bool) -> Config {
        toml::from_str(&format!(
            r#"
[server]
name = "jupe.example.net"
numeric = 0

[uplink]
hostname = "127.0.0.1"
password = "linkpass"

[bot]
enabled = {bot_enabled}
salt = "pepper"
"#
        ))
        .unwrap()
    }

    #[test]
    fn test_identity_numerics() {
        let identity = Identity::from_config(&config(true), 1_700_000_000).unwrap();
        assert_eq!(identity.server_numeric(), "AA");
        let bot = identity.bot.as_ref().unwrap();
        assert_eq!(bot.numeric_str(), "AAAAA");
        assert_eq!(bot.secure_addr, "JupeServ@jupe.example.net");
        assert_eq!(bot.encoded_ip, "B]AAAB");
    }

    #[test]
    fn test_disabled_bot_has_no_session() {
        let identity = Identity::from_config(&config(false), 0).unwrap();
        assert!(identity.bot.is_none());
    }

    #[test]
    fn test_addressing() {
        let identity = Identity::from_config(&config(true), 0).unwrap();
        let bot = identity.bot.unwrap();
        assert!(bot.is_addressed("AAAAA"));
        assert!(bot.is_addressed("jupeserv@JUPE.example.net"));
        assert!(bot.is_secure("JupeServ@jupe.example.net"));
        assert!(!bot.is_secure("AAAAA"));
        assert!(!bot.is_addressed("#JupeServ"));
        assert!(!bot.is_addressed("AAAAB"));
    }

    #[test]
    fn test_out_of_range_numeric() {
        let mut cfg = config(true);
        cfg.server.numeric = 4096;
        assert!(Identity::from_config(&cfg, 0).is_err());
    }
}
