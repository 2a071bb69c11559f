// Engine layer - check library and gated orchestration
// Sits between the transport seam and CLI presentation

pub mod checks;
pub mod error;
pub mod probe;
pub mod runner;

pub use checks::ShapeHandling;
pub use error::{Error, Result};
pub use probe::{ReachabilityProbe, SystemPingProbe};
pub use runner::{RunnerOptions, TestRunner};

use fieldcheck_types::{DeviceConfig, TestReport};

// Façade API - stable entry point for the CLI layer

/// Run the full field-check sequence against one device.
pub fn run_field_tests(config: DeviceConfig, options: RunnerOptions) -> Result<TestReport> {
    TestRunner::new(config, options).run()
}
