//! Base trait for the service bot.
//!
//! Provides reply construction shared by every bot command.

use p10_proto::Message;

use super::ServiceEffect;
use crate::error::HandlerError;
use crate::state::BotSession;

/// Result type for service commands - a list of effects to apply.
pub type ServiceResult = Vec<ServiceEffect>;

/// Base trait for services providing common reply functionality.
pub trait ServiceBase {
    /// The introduced bot this service speaks as.
    fn bot(&self) -> &BotSession;

    /// Create a single reply effect, sent with the configured reply method.
    fn reply_effect(&self, target: &str, text: &str) -> ServiceEffect {
        let bot = self.bot();
        ServiceEffect::Reply {
            target: target.to_string(),
            msg: Message::new(bot.numeric_str(), bot.config.reply_method.token())
                .arg(target)
                .trailing(text),
        }
    }

    /// Create multiple reply effects.
    fn reply_effects(&self, target: &str, texts: Vec<&str>) -> ServiceResult {
        texts
            .into_iter()
            .map(|t| self.reply_effect(target, t))
            .collect()
    }

    /// Create an error reply (single message).
    fn error_reply(&self, target: &str, error: &HandlerError) -> ServiceResult {
        vec![self.reply_effect(target, &error.reply_text(&self.bot().secure_addr))]
    }
}
