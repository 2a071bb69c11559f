use std::fmt;

/// Result type for fieldcheck-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while running checks
#[derive(Debug)]
pub enum Error {
    /// Transport layer error
    Transport(fieldcheck_transport::Error),

    /// A reply lacked an envelope key the check needed (strict mode only)
    MissingField { command: String, field: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "transport error: {}", err),
            Error::MissingField { command, field } => {
                write!(f, "reply to `{}` has no `{}` element", command, field)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::MissingField { .. } => None,
        }
    }
}

impl From<fieldcheck_transport::Error> for Error {
    fn from(err: fieldcheck_transport::Error) -> Self {
        Error::Transport(err)
    }
}
