//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use p10_proto::numeric::MAX_SERVER;
use thiserror::Error;

/// Length of a hex-encoded SHA-512 digest.
const DIGEST_HEX_LEN: usize = 128;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.name is required")]
    MissingServerName,
    #[error("server.name must not contain spaces, got '{0}'")]
    InvalidServerName(String),
    #[error("server.numeric must be at most 4095, got {0}")]
    NumericOutOfRange(u16),
    #[error("server.description is required")]
    MissingDescription,
    #[error("server.flags must start with '+', got '{0}'")]
    InvalidFlags(String),
    #[error("uplink.password is required")]
    MissingLinkPassword,
    #[error("bot.nick is required")]
    MissingBotNick,
    #[error("bot.channel must start with '#', got '{0}'")]
    InvalidBotChannel(String),
    #[error("bot.trigger must not be whitespace")]
    InvalidTrigger,
    #[error("bot.accounts key '{0}' must be lowercase")]
    AccountNotLowercase(String),
    #[error("bot.accounts.{0} must be a lowercase hex SHA-512 digest")]
    InvalidDigest(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Server identity
    let name = &config.server.name;
    if name.is_empty() {
        errors.push(ValidationError::MissingServerName);
    } else if name.contains(' ') {
        errors.push(ValidationError::InvalidServerName(name.clone()));
    }
    if config.server.numeric > MAX_SERVER {
        errors.push(ValidationError::NumericOutOfRange(config.server.numeric));
    }
    if config.server.description.is_empty() {
        errors.push(ValidationError::MissingDescription);
    }
    // The uplink drops the link on an empty flags field.
    let flags = &config.server.flags;
    if !flags.starts_with('+') || flags.contains(' ') {
        errors.push(ValidationError::InvalidFlags(flags.clone()));
    }

    if config.uplink.password.is_empty() {
        errors.push(ValidationError::MissingLinkPassword);
    }

    // Bot block, checked only when it will be introduced
    if let Some(bot) = config.enabled_bot() {
        if bot.nick.is_empty() {
            errors.push(ValidationError::MissingBotNick);
        }
        if !bot.channel.starts_with('#') || bot.channel.contains(' ') {
            errors.push(ValidationError::InvalidBotChannel(bot.channel.clone()));
        }
        if bot.trigger.is_whitespace() {
            errors.push(ValidationError::InvalidTrigger);
        }

        let mut accounts: Vec<_> = bot.accounts.iter().collect();
        accounts.sort();
        for (account, digest) in accounts {
            if account.to_lowercase() != *account {
                errors.push(ValidationError::AccountNotLowercase(account.clone()));
            }
            let well_formed = digest.len() == DIGEST_HEX_LEN
                && digest
                    .bytes()
                    .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
            if !well_formed {
                errors.push(ValidationError::InvalidDigest(account.clone()));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "a5eb61c9170a54325ee8c75d74611a721cb9a782d4d2ead1b808f430c8568b333c51b180eff98f0113d0b2e9fb70c9bc6b991ce91c02041eecc9820c55113f73";

    fn minimal_valid_config() -> String {
        format!(
            r#"
[server]
name = "jupe.example.net"
numeric = 0
flags = "+s"

[uplink]
hostname = "127.0.0.1"
password = "changeme"

[bot]
salt = "changeme"

[bot.accounts]
changeme = "{DIGEST}"
"#
        )
    }

    #[test]
    fn test_valid_config_passes() {
        let config: Config = toml::from_str(&minimal_valid_config()).unwrap();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_server_name_fails() {
        let toml = minimal_valid_config().replace("name = \"jupe.example.net\"", "name = \"\"");
        let config: Config = toml::from_str(&toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::MissingServerName)));
    }

    #[test]
    fn test_numeric_out_of_range_fails() {
        let toml = minimal_valid_config().replace("numeric = 0", "numeric = 4096");
        let config: Config = toml::from_str(&toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::NumericOutOfRange(4096))));
    }

    #[test]
    fn test_empty_flags_fail() {
        let toml = minimal_valid_config().replace("flags = \"+s\"", "flags = \"\"");
        let config: Config = toml::from_str(&toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidFlags(_))));
    }

    #[test]
    fn test_bare_plus_flags_pass() {
        let toml = minimal_valid_config().replace("flags = \"+s\"", "flags = \"+\"");
        let config: Config = toml::from_str(&toml).unwrap();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_bad_digest_and_uppercase_account_fail() {
        let toml = minimal_valid_config().replace(
            &format!("changeme = \"{DIGEST}\""),
            &format!("Admin = \"{}\"", DIGEST.to_uppercase()),
        );
        let config: Config = toml::from_str(&toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::AccountNotLowercase(_))));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidDigest(_))));
    }

    #[test]
    fn test_disabled_bot_is_not_checked() {
        let toml = minimal_valid_config().replace("[bot]\n", "[bot]\nenabled = false\nchannel = \"nohash\"\n");
        let config: Config = toml::from_str(&toml).unwrap();
        assert!(validate(&config).is_ok());
    }
}
