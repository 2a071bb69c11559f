// Types layer - report data model and device configuration
// Shared by the transport, engine and CLI crates; has no I/O of its own.

pub mod config;
pub mod report;

pub use config::DeviceConfig;
pub use report::{CheckOutcome, CheckStatus, TestReport};
