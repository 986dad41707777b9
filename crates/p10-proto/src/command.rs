//! Server-protocol commands this library recognizes.
//!
//! P10 servers may use either the long or the tokenized form of a command;
//! both map to the same variant. Lookup is case-sensitive.

/// A recognized inbound P10 command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `INFO` / `F`
    Info,
    /// `PING` / `G`
    Ping,
    /// `TIME` / `TI`
    Time,
    /// `MOTD` / `MO`
    Motd,
    /// `PRIVMSG` / `P`
    Privmsg,
    /// `KILL` / `D`
    Kill,
    /// `QUIT` / `Q`
    Quit,
}

impl Command {
    /// Every recognized command.
    pub const ALL: [Command; 7] = [
        Command::Info,
        Command::Ping,
        Command::Time,
        Command::Motd,
        Command::Privmsg,
        Command::Kill,
        Command::Quit,
    ];

    /// Look up a wire token, long or short form.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "INFO" | "F" => Some(Self::Info),
            "PING" | "G" => Some(Self::Ping),
            "TIME" | "TI" => Some(Self::Time),
            "MOTD" | "MO" => Some(Self::Motd),
            "PRIVMSG" | "P" => Some(Self::Privmsg),
            "KILL" | "D" => Some(Self::Kill),
            "QUIT" | "Q" => Some(Self::Quit),
            _ => None,
        }
    }

    /// The long command name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Ping => "PING",
            Self::Time => "TIME",
            Self::Motd => "MOTD",
            Self::Privmsg => "PRIVMSG",
            Self::Kill => "KILL",
            Self::Quit => "QUIT",
        }
    }

    /// The tokenized (short) command name.
    pub fn token(self) -> &'static str {
        match self {
            Self::Info => "F",
            Self::Ping => "G",
            Self::Time => "TI",
            Self::Motd => "MO",
            Self::Privmsg => "P",
            Self::Kill => "D",
            Self::Quit => "Q",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
