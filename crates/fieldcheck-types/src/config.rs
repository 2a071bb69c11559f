use std::path::PathBuf;

pub const DEFAULT_SSH_PORT: u16 = 22;

/// Connection target and credentials for a single device under test.
///
/// Built once from CLI arguments and handed to the runner; nothing in the
/// workspace keeps device or credential state outside this struct.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// IP address or hostname of the device.
    pub host: String,
    /// SSH username.
    pub username: String,
    /// Path to the SSH private key file.
    pub keyfile: PathBuf,
    /// SSH port, normally 22.
    pub port: u16,
}

impl DeviceConfig {
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        keyfile: impl Into<PathBuf>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            keyfile: keyfile.into(),
            port: DEFAULT_SSH_PORT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}
