//! JupeServ command handlers.

pub mod auth;
pub mod help;
pub mod mkpasswd;
pub mod raw;

use tracing::{debug, warn};

use super::{Addressing, BotCommand, Request};
use crate::error::HandlerError;
use crate::services::base::ServiceBase;
use crate::services::ServiceEffect;
use crate::state::{AuthStore, BotSession};
use crate::telemetry::spans;

/// Result of a JupeServ command - a list of effects to apply.
pub type JupeServResult = Vec<ServiceEffect>;

/// JupeServ service.
pub struct JupeServ<'a> {
    bot: &'a BotSession,
    server_numeric: String,
}

impl ServiceBase for JupeServ<'_> {
    fn bot(&self) -> &BotSession {
        self.bot
    }
}

impl<'a> JupeServ<'a> {
    /// Create a JupeServ speaking as `bot` on server `server_numeric`.
    pub fn new(bot: &'a BotSession, server_numeric: String) -> Self {
        Self {
            bot,
            server_numeric,
        }
    }

    /// Handle a message addressed to JupeServ.
    /// Returns a list of effects that the caller should apply.
    pub fn handle_command(&self, auth: &AuthStore, request: &Request<'_>) -> JupeServResult {
        let _span = spans::command(&request.command, request.sender, Some(request.target)).entered();

        let Some(command) = BotCommand::from_name(&request.command) else {
            // Only the plain-numeric path admits which commands exist.
            if request.via == Addressing::Numeric {
                let error = HandlerError::NoSuchCommand(request.command.clone());
                return self.error_reply(request.sender, &error);
            }
            return Vec::new();
        };

        let result = match command {
            BotCommand::Auth => {
                auth::handle_auth(self.bot, auth, request, |t, x| self.reply_effect(t, x))
            }
            BotCommand::Help => Ok(help::handle_help(self.bot, request, |t, ts| {
                self.reply_effects(t, ts)
            })),
            BotCommand::Mkpasswd => {
                mkpasswd::handle_mkpasswd(self.bot, request, |t, x| self.reply_effect(t, x))
            }
            BotCommand::Raw => raw::handle_raw(
                self.bot,
                &self.server_numeric,
                auth,
                request,
                |t, x| self.reply_effect(t, x),
            ),
        };

        match result {
            Ok(effects) => effects,
            Err(error) => {
                if error.is_security_violation() {
                    warn!(
                        numeric = %request.sender,
                        command = %command,
                        code = error.error_code(),
                        "Bot command refused"
                    );
                } else {
                    debug!(
                        numeric = %request.sender,
                        command = %command,
                        code = error.error_code(),
                        "Bot command failed"
                    );
                }
                self.error_reply(request.sender, &error)
            }
        }
    }
}
