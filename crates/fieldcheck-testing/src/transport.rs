use fieldcheck_transport::{
    DeviceSession, Error, Result, SessionProvider, DISPLAY_DIRECTIVE,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Which enumerated transport error a failing provider should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectFailure {
    /// Expected: TCP refused
    Refused,
    /// Expected: key rejected
    AuthFailed,
    /// Expected: SSH negotiation/EOF failure
    Protocol,
    /// Unexpected: raw IO error, must abort the run
    Io,
}

impl ConnectFailure {
    fn to_error(self) -> Error {
        match self {
            ConnectFailure::Refused => Error::ConnectionRefused("scripted refusal".to_string()),
            ConnectFailure::AuthFailed => {
                Error::AuthenticationFailed("scripted auth rejection".to_string())
            }
            ConnectFailure::Protocol => Error::Protocol("scripted EOF".to_string()),
            ConnectFailure::Io => Error::Io(std::io::Error::other("scripted socket loss")),
        }
    }
}

/// Shared record of what a scripted provider was asked to do. Cloneable;
/// keep a clone before boxing the provider into a runner.
#[derive(Clone, Default)]
pub struct TransportLog {
    connects: Arc<AtomicUsize>,
    sent: Arc<Mutex<Vec<String>>>,
}

impl TransportLog {
    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Commands exactly as the session received them, directive included.
    pub fn sent_commands(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

/// `SessionProvider` fake answering commands from a canned script.
///
/// Replies are keyed by the full command text the device would receive;
/// [`with_xml_reply`](Self::with_xml_reply) appends the display directive
/// for you, so an executor that failed to append it would miss the script
/// and surface as a command failure in the test.
#[derive(Default)]
pub struct ScriptedProvider {
    replies: HashMap<String, String>,
    failure: Option<ConnectFailure>,
    log: TransportLog,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose every connection attempt fails with `failure`.
    pub fn failing(failure: ConnectFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    /// Script a raw reply for `command` (directive appended here).
    pub fn with_xml_reply(mut self, command: &str, raw: impl Into<String>) -> Self {
        self.replies
            .insert(format!("{}{}", command, DISPLAY_DIRECTIVE), raw.into());
        self
    }

    pub fn log(&self) -> TransportLog {
        self.log.clone()
    }
}

impl SessionProvider for ScriptedProvider {
    fn connect(&self) -> Result<Box<dyn DeviceSession>> {
        self.log.connects.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = self.failure {
            return Err(failure.to_error());
        }
        Ok(Box::new(ScriptedSession {
            replies: self.replies.clone(),
            log: self.log.clone(),
        }))
    }
}

struct ScriptedSession {
    replies: HashMap<String, String>,
    log: TransportLog,
}

impl DeviceSession for ScriptedSession {
    fn send_command(&mut self, command: &str) -> Result<String> {
        self.log.sent.lock().unwrap().push(command.to_string());
        self.replies
            .get(command)
            .cloned()
            .ok_or_else(|| Error::CommandFailed(format!("unscripted command: {}", command)))
    }
}
