//! The uplink session.
//!
//! One connection, one task: write the handshake, then read, decode and
//! dispatch lines strictly in arrival order. Every reply a line produces is
//! written before the next line is looked at.

use bytes::BytesMut;
use futures_util::SinkExt;
use p10_proto::P10Codec;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, WriteHalf};
use tokio::net::TcpStream;
use tokio_util::codec::{Decoder, FramedWrite};
use tracing::{Instrument, debug, info, warn};

use super::handshake::HandshakeMachine;
use crate::config::Config;
use crate::error::LinkError;
use crate::handlers::{Context, Registry};
use crate::state::{AuthStore, Identity};
use crate::telemetry::spans;

/// Largest single read from the uplink.
pub const READ_CHUNK: usize = 4096;

/// How a session ended, for the shutdown log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines dispatched to a handler.
    pub dispatched: u64,
    /// Lines skipped because they could not be decoded.
    pub skipped: u64,
    /// Senders still authenticated at disconnect.
    pub authenticated: usize,
}

/// A link session over any byte stream.
pub struct Link<S> {
    stream: S,
    identity: Identity,
    password: String,
}

impl<S> Link<S>
where
    S: AsyncRead + AsyncWrite,
{
    pub fn new(stream: S, identity: Identity, password: impl Into<String>) -> Self {
        Self {
            stream,
            identity,
            password: password.into(),
        }
    }

    /// Run the session until the uplink closes the connection.
    pub async fn run(self) -> Result<SessionSummary, LinkError> {
        let Self {
            stream,
            identity,
            password,
        } = self;
        let (mut reader, writer) = tokio::io::split(stream);
        let mut writer = FramedWrite::new(writer, P10Codec::new());

        let burst = HandshakeMachine::new(&identity, &password).remaining_lines()?;
        for line in burst {
            send_line(&mut writer, line.to_string()).await?;
        }
        info!(
            server = %identity.name,
            bot = identity.bot.is_some(),
            "Handshake sent, end of burst"
        );

        let mut codec = P10Codec::new();
        let mut buffer = BytesMut::with_capacity(READ_CHUNK);
        let mut chunk = vec![0u8; READ_CHUNK];
        let mut auth = AuthStore::new();
        let mut registry = Registry::new();
        let mut skipped = 0u64;

        loop {
            let read = reader.read(&mut chunk).await?;
            if read == 0 {
                info!("Connection closed by peer");
                break;
            }
            let data = &chunk[..read];
            // A bare delimiter may be finishing a line left over from the
            // previous read; it only means disconnect with nothing pending.
            let pending = !buffer.is_empty() || codec.is_discarding();
            if !pending && data.iter().all(|b| matches!(b, b'\r' | b'\n')) {
                info!("Blank read from peer, closing link");
                break;
            }
            buffer.extend_from_slice(data);

            loop {
                let line = match codec.decode(&mut buffer) {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) if e.is_recoverable() => {
                        skipped += 1;
                        warn!(error = %e, "Skipping undecodable line");
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                };
                debug!(line = %line, "<<");

                let replies = {
                    let mut ctx = Context::new(&identity, &mut auth);
                    registry.dispatch(&mut ctx, &line);
                    ctx.take_outbox()
                };
                for reply in replies {
                    send_line(&mut writer, reply).await?;
                }
            }
        }

        if !buffer.is_empty() {
            debug!(bytes = buffer.len(), "Dropping partial line at disconnect");
        }

        Ok(SessionSummary {
            dispatched: registry.total_dispatched(),
            skipped,
            authenticated: auth.len(),
        })
    }
}

/// Write one line, logging it the way it goes out.
async fn send_line<S: AsyncWrite>(
    writer: &mut FramedWrite<WriteHalf<S>, P10Codec>,
    line: String,
) -> Result<(), LinkError> {
    debug!(line = %line, ">>");
    writer.send(line).await?;
    Ok(())
}

/// Connect to the configured uplink.
pub async fn connect(config: &Config) -> Result<TcpStream, LinkError> {
    let address = config.uplink.address();
    info!(address = %address, "Connecting to uplink");
    let stream = TcpStream::connect(&address).await?;
    stream.set_nodelay(true)?;
    Ok(stream)
}

/// Connect and run one link session with a fresh identity.
pub async fn run_link(config: &Config) -> Result<SessionSummary, LinkError> {
    let identity = Identity::from_config(config, chrono::Utc::now().timestamp())?;
    let span = spans::link(&identity.server_numeric(), &config.uplink.address());

    async move {
        let stream = connect(config).await?;
        Link::new(stream, identity, config.uplink.password.as_str())
            .run()
            .await
    }
    .instrument(span)
    .await
}
