//! Fake uplink (hub) for integration testing.
//!
//! Listens on an ephemeral port, accepts jupeserv's connection and lets the
//! test read and write raw protocol lines.

use jupeserv::config::Config;
use jupeserv::sync::{SessionSummary, run_link};
use jupeserv::LinkError;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::task::JoinHandle;
use tokio::time::timeout;

/// Salt used by [`test_config`].
pub const SALT: &str = "pepper";
/// Password of the `admin` account in [`test_config`].
pub const ADMIN_PASSWORD: &str = "hunter2";

/// Build a config pointing at `port`, with the bot enabled and one account.
pub fn test_config(port: u16) -> Config {
    let digest = jupeserv::security::hash_password(SALT, ADMIN_PASSWORD);
    toml::from_str(&format!(
        r#"
[server]
name = "jupe.test"
numeric = 0
description = "Test jupe"

[uplink]
hostname = "127.0.0.1"
port = {port}
password = "linkpass"

[bot]
salt = "{SALT}"

[bot.accounts]
admin = "{digest}"
"#
    ))
    .expect("test config parses")
}

/// The hub side of a link.
pub struct FakeUplink {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl FakeUplink {
    /// Receive a single line, CRLF stripped.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    /// Receive a line with a timeout.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let read = timeout(dur, self.reader.read_line(&mut line)).await??;
        if read == 0 {
            anyhow::bail!("connection closed");
        }
        if !line.ends_with("\r\n") {
            anyhow::bail!("line not CRLF-terminated: {:?}", line);
        }
        line.truncate(line.len() - 2);
        Ok(line)
    }

    /// Receive `count` lines.
    pub async fn recv_lines(&mut self, count: usize) -> anyhow::Result<Vec<String>> {
        let mut lines = Vec::with_capacity(count);
        for _ in 0..count {
            lines.push(self.recv().await?);
        }
        Ok(lines)
    }

    /// Whether nothing arrives within `dur`.
    pub async fn is_quiet(&mut self, dur: Duration) -> bool {
        self.recv_timeout(dur).await.is_err()
    }

    /// Send a raw line, adding CRLF if missing.
    pub async fn send_raw(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        if !line.ends_with('\n') {
            self.writer.write_all(b"\r\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    /// Send bytes exactly as given.
    pub async fn send_bytes(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        self.writer.write_all(bytes).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Read the full handshake: PASS, SERVER, N, B, EB.
    pub async fn expect_handshake(&mut self) -> anyhow::Result<Vec<String>> {
        let lines = self.recv_lines(5).await?;
        anyhow::ensure!(lines[0] == "PASS :linkpass", "unexpected PASS: {}", lines[0]);
        anyhow::ensure!(lines[4] == "AA EB", "unexpected end of burst: {}", lines[4]);
        Ok(lines)
    }

    /// Close the hub side.
    pub async fn close(mut self) -> anyhow::Result<()> {
        self.writer.shutdown().await?;
        Ok(())
    }
}

/// Start a fake hub, run jupeserv against it, and accept the link.
pub async fn spawn_link() -> anyhow::Result<(FakeUplink, JoinHandle<Result<SessionSummary, LinkError>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    let config = test_config(port);

    let handle = tokio::spawn(async move { run_link(&config).await });

    let (stream, _) = timeout(Duration::from_secs(5), listener.accept()).await??;
    let (read_half, write_half) = stream.into_split();
    Ok((
        FakeUplink {
            reader: BufReader::new(read_half),
            writer: write_half,
        },
        handle,
    ))
}
