use crate::error::Result;
use crate::reply;
use crate::traits::{DeviceSession, SessionProvider};
use serde_json::Value;

/// Directive appended to every command so the device returns structured
/// output instead of human-formatted text.
pub const DISPLAY_DIRECTIVE: &str = " | display xml";

/// Issues diagnostic commands against one device.
///
/// Owns the session for its own lifetime: the session is established lazily
/// on the first command (or an explicit [`connect`](Self::connect)), cached,
/// and reused for every subsequent command. It is never re-established and
/// never shared; dropping the executor closes it. Session establishment
/// failures propagate to the caller unchanged.
pub struct CommandExecutor {
    provider: Box<dyn SessionProvider>,
    session: Option<Box<dyn DeviceSession>>,
}

impl CommandExecutor {
    pub fn new(provider: Box<dyn SessionProvider>) -> Self {
        Self {
            provider,
            session: None,
        }
    }

    /// Establish and cache the session without sending a command.
    /// Idempotent once connected.
    pub fn connect(&mut self) -> Result<()> {
        self.session()?;
        Ok(())
    }

    /// Send `command` with the display directive appended and return the
    /// parsed reply tree, rooted at the reply's top-level tags.
    pub fn execute(&mut self, command: &str) -> Result<Value> {
        let full_command = format!("{}{}", command, DISPLAY_DIRECTIVE);
        let raw = self.session()?.send_command(&full_command)?;
        reply::parse_reply(&raw)
    }

    fn session(&mut self) -> Result<&mut dyn DeviceSession> {
        let session = match self.session.take() {
            Some(session) => session,
            None => self.provider.connect()?,
        };
        Ok(self.session.insert(session).as_mut())
    }
}
