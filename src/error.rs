//! Unified error handling for jupeserv.
//!
//! `HandlerError` covers the bot sub-protocol: each variant maps to the
//! reply line the issuer sees. `LinkError` covers failures that end the
//! link session.

use p10_proto::{NumericError, ProtocolError};
use thiserror::Error;

// ============================================================================
// Handler Errors (bot command processing)
// ============================================================================

/// Errors that can occur while handling a bot command.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("command used in a channel")]
    NotPublic,

    #[error("command not sent to the secure address")]
    MustUseSecure,

    #[error("not enough parameters")]
    NeedMoreArgs,

    #[error("already authenticated")]
    AlreadyAuthed,

    #[error("no such account: {0}")]
    NoSuchAccount(String),

    #[error("incorrect password for account {0}")]
    IncorrectPassword(String),

    #[error("access denied")]
    AccessDenied,

    #[error("no such command: {0}")]
    NoSuchCommand(String),

    #[error("numeric error: {0}")]
    Numeric(#[from] NumericError),
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotPublic => "not_public",
            Self::MustUseSecure => "must_use_secure",
            Self::NeedMoreArgs => "need_more_args",
            Self::AlreadyAuthed => "already_authed",
            Self::NoSuchAccount(_) => "no_such_account",
            Self::IncorrectPassword(_) => "incorrect_password",
            Self::AccessDenied => "access_denied",
            Self::NoSuchCommand(_) => "no_such_command",
            Self::Numeric(_) => "numeric_error",
        }
    }

    /// The reply text sent back to the issuer.
    ///
    /// `secure_addr` is the bot's `<nick>@<server>` form, quoted by
    /// [`HandlerError::MustUseSecure`].
    pub fn reply_text(&self, secure_addr: &str) -> String {
        match self {
            Self::NotPublic => {
                "Security violation. You may not use this command publicly.".to_string()
            }
            Self::MustUseSecure => format!(
                "Security violation. Please /msg {} <command> [args] instead.",
                secure_addr
            ),
            Self::NeedMoreArgs => "Insufficient parameters.".to_string(),
            Self::AlreadyAuthed => "You are already authed.".to_string(),
            Self::NoSuchAccount(_) => "That account does not exist.".to_string(),
            Self::IncorrectPassword(_) => "That password is incorrect.".to_string(),
            Self::AccessDenied => "You do not have permission to use this command.".to_string(),
            Self::NoSuchCommand(name) => format!("The command [{}] does not exist.", name),
            Self::Numeric(_) => "Internal error.".to_string(),
        }
    }

    /// Whether this failure is an access-control refusal worth a warning.
    pub fn is_security_violation(&self) -> bool {
        matches!(
            self,
            Self::NotPublic | Self::MustUseSecure | Self::IncorrectPassword(_) | Self::AccessDenied
        )
    }
}

// ============================================================================
// Link Errors (session-fatal)
// ============================================================================

/// Errors that end a link session.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("numeric error: {0}")]
    Numeric(#[from] NumericError),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECURE: &str = "JupeServ@jupe.example.net";

    #[test]
    fn test_handler_error_codes() {
        assert_eq!(HandlerError::NeedMoreArgs.error_code(), "need_more_args");
        assert_eq!(HandlerError::AccessDenied.error_code(), "access_denied");
        assert_eq!(
            HandlerError::NoSuchCommand("x".into()).error_code(),
            "no_such_command"
        );
    }

    #[test]
    fn test_reply_texts() {
        assert_eq!(
            HandlerError::NotPublic.reply_text(SECURE),
            "Security violation. You may not use this command publicly."
        );
        assert_eq!(
            HandlerError::MustUseSecure.reply_text(SECURE),
            "Security violation. Please /msg JupeServ@jupe.example.net <command> [args] instead."
        );
        assert_eq!(
            HandlerError::NoSuchCommand("foo".into()).reply_text(SECURE),
            "The command [foo] does not exist."
        );
        assert_eq!(
            HandlerError::IncorrectPassword("admin".into()).reply_text(SECURE),
            "That password is incorrect."
        );
    }

    #[test]
    fn test_security_violations() {
        assert!(HandlerError::AccessDenied.is_security_violation());
        assert!(HandlerError::MustUseSecure.is_security_violation());
        assert!(!HandlerError::NeedMoreArgs.is_security_violation());
    }
}
