// Transport layer - everything between a DeviceConfig and a parsed reply tree
// The engine sees only the traits and the CommandExecutor; ssh2 stays in here.

pub mod error;
pub mod executor;
pub mod reply;
pub mod ssh;
pub mod traits;

pub use error::{Error, Result};
pub use executor::{CommandExecutor, DISPLAY_DIRECTIVE};
pub use reply::parse_reply;
pub use ssh::SshSessionProvider;
pub use traits::{DeviceSession, SessionProvider};
