//! ssh2-backed implementation of the session seam.
//!
//! Blocking by design: checks run strictly one after another against a
//! single cached session, so an async transport would buy nothing here.
//! Each command runs on a fresh exec channel over that session.

use crate::error::{Error, Result};
use crate::traits::{DeviceSession, SessionProvider};
use fieldcheck_types::DeviceConfig;
use ssh2::Session;
use std::io::Read;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Establishes public-key-authenticated SSH sessions to one device.
pub struct SshSessionProvider {
    config: DeviceConfig,
}

impl SshSessionProvider {
    pub fn new(config: DeviceConfig) -> Self {
        Self { config }
    }
}

impl SessionProvider for SshSessionProvider {
    fn connect(&self) -> Result<Box<dyn DeviceSession>> {
        let stream = open_stream(&self.config)?;

        let mut session =
            Session::new().map_err(|err| Error::Protocol(err.message().to_string()))?;
        session.set_tcp_stream(stream);
        session
            .handshake()
            .map_err(|err| Error::Protocol(err.message().to_string()))?;

        session
            .userauth_pubkey_file(&self.config.username, None, &self.config.keyfile, None)
            .map_err(|err| Error::AuthenticationFailed(err.message().to_string()))?;
        if !session.authenticated() {
            return Err(Error::AuthenticationFailed(format!(
                "public key rejected for user {}",
                self.config.username
            )));
        }

        Ok(Box::new(SshDeviceSession { session }))
    }
}

fn open_stream(config: &DeviceConfig) -> Result<TcpStream> {
    let mut addrs = (config.host.as_str(), config.port)
        .to_socket_addrs()
        .map_err(|err| Error::ConnectionRefused(format!("{}: {}", config.host, err)))?;
    let addr = addrs.next().ok_or_else(|| {
        Error::ConnectionRefused(format!("{}: no address resolved", config.host))
    })?;

    TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT).map_err(|err| match err.kind() {
        std::io::ErrorKind::ConnectionRefused
        | std::io::ErrorKind::TimedOut
        | std::io::ErrorKind::HostUnreachable
        | std::io::ErrorKind::NetworkUnreachable => {
            Error::ConnectionRefused(format!("{}: {}", addr, err))
        }
        _ => Error::Io(err),
    })
}

struct SshDeviceSession {
    session: Session,
}

impl DeviceSession for SshDeviceSession {
    fn send_command(&mut self, command: &str) -> Result<String> {
        let mut channel = self
            .session
            .channel_session()
            .map_err(|err| Error::CommandFailed(err.message().to_string()))?;
        channel
            .exec(command)
            .map_err(|err| Error::CommandFailed(err.message().to_string()))?;

        let mut output = String::new();
        channel.read_to_string(&mut output)?;

        channel
            .wait_close()
            .map_err(|err| Error::CommandFailed(err.message().to_string()))?;
        Ok(output)
    }
}
