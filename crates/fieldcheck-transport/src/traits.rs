use crate::error::Result;

/// Session establishment seam.
///
/// Responsibilities:
/// - Authenticate against one device and hand back a live session
/// - Map transport failures onto the enumerated error kinds, so callers can
///   tell an expected connection failure from an unexpected one
///
/// A provider is bound to a single device; checking several devices means
/// one provider (and one runner) per device.
pub trait SessionProvider: Send + Sync {
    /// Establish an authenticated session. No retries, no fallback.
    fn connect(&self) -> Result<Box<dyn DeviceSession>>;
}

/// A live authenticated connection to one device.
///
/// Not safe for concurrent command interleaving; commands are issued
/// strictly one after another.
pub trait DeviceSession: Send {
    /// Send one CLI command and return the raw textual response.
    fn send_command(&mut self, command: &str) -> Result<String>;
}
