//! Channel name utilities.

/// Extension trait for telling channel targets apart from numerics.
pub trait ChannelExt {
    /// Whether this target names a channel.
    ///
    /// P10 message targets are a channel, a client numeric, or a
    /// `nick@server` address. Only channels begin with `#`.
    fn is_channel_name(&self) -> bool;
}

impl ChannelExt for &str {
    fn is_channel_name(&self) -> bool {
        self.starts_with('#')
    }
}

impl ChannelExt for String {
    fn is_channel_name(&self) -> bool {
        self.as_str().is_channel_name()
    }
}
