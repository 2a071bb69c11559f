use std::fmt;

/// Result type for fieldcheck-transport operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the transport layer
#[derive(Debug)]
pub enum Error {
    /// TCP connection refused or host unreachable at the socket level
    ConnectionRefused(String),

    /// Key-based authentication rejected by the device
    AuthenticationFailed(String),

    /// SSH negotiation, banner or EOF failure
    Protocol(String),

    /// Remote command dispatch failed on an established session
    CommandFailed(String),

    /// Response contained no parseable reply envelope
    MalformedReply(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl Error {
    /// Whether this is one of the *expected* session-establishment failures.
    ///
    /// The session check absorbs these kinds into a plain `false`; every
    /// other kind is unexpected and aborts the run.
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            Error::ConnectionRefused(_) | Error::AuthenticationFailed(_) | Error::Protocol(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConnectionRefused(msg) => write!(f, "connection refused: {}", msg),
            Error::AuthenticationFailed(msg) => write!(f, "authentication failed: {}", msg),
            Error::Protocol(msg) => write!(f, "SSH protocol error: {}", msg),
            Error::CommandFailed(msg) => write!(f, "remote command failed: {}", msg),
            Error::MalformedReply(msg) => write!(f, "malformed device reply: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
