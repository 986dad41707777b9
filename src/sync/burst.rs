//! Burst generation.
//!
//! Our burst is tiny: the service bot and its home channel. The channel is
//! burst as if it already existed with the bot opped; if the network's copy
//! is older, its timestamp wins and the bot simply joins unopped.

use p10_proto::Message;

use crate::state::Identity;

/// User modes given to the bot: invisible, network service, oper.
const BOT_MODES: &str = "+iko";
/// Channel modes burst on the home channel.
const CHANNEL_MODES: &str = "+inst";

/// Generates the N and B lines for the bot, or nothing when it is disabled.
pub fn generate_burst(identity: &Identity) -> Vec<Message> {
    let Some(bot) = identity.bot.as_ref() else {
        return Vec::new();
    };
    let server = identity.server_numeric();
    let epoch = identity.epoch.to_string();
    let numeric = bot.numeric_str();

    // <srv> N <nick> <hops> <ts> <user> <host> <modes> <ip> <numeric> :<realname>
    let nick = Message::new(server.as_str(), "N")
        .arg(bot.config.nick.as_str())
        .arg("1")
        .arg(epoch.as_str())
        .arg(bot.config.ident())
        .arg(bot.config.host(&identity.name))
        .arg(BOT_MODES)
        .arg(bot.encoded_ip.as_str())
        .arg(numeric.as_str())
        .trailing(bot.config.realname());

    // <srv> B <channel> <ts> <modes> <numeric>:o
    let channel = Message::new(server, "B")
        .arg(bot.config.channel.as_str())
        .arg(epoch)
        .arg(CHANNEL_MODES)
        .arg(format!("{}:o", numeric));

    vec![nick, channel]
}
