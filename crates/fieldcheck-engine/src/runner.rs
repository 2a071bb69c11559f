//! Gated sequential orchestration of the check library.
//!
//! The sequence is fixed: reachability gates the session check, the session
//! check gates the two remote checks, and the two remote checks gate
//! nothing (both always run once a session exists). A failed gate records
//! its own outcome and jumps straight to aggregation; checks behind a
//! failed gate are never attempted, so they can never raise.

use crate::checks::{self, ShapeHandling};
use crate::error::Result;
use crate::probe::{ReachabilityProbe, SystemPingProbe};
use fieldcheck_transport::{CommandExecutor, SessionProvider, SshSessionProvider};
use fieldcheck_types::{CheckOutcome, CheckStatus, DeviceConfig, TestReport};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerOptions {
    /// Treat replies with missing envelope keys as errors instead of
    /// benign negatives. See [`ShapeHandling`].
    pub strict_replies: bool,
}

impl RunnerOptions {
    fn shapes(&self) -> ShapeHandling {
        if self.strict_replies {
            ShapeHandling::Strict
        } else {
            ShapeHandling::Lenient
        }
    }
}

/// Runs the full check sequence against one device and produces the report.
///
/// One runner per device per run: it owns the command executor (and through
/// it the session) for exactly one run, and `run` consumes the runner, so
/// the session is released when the run ends regardless of how it ends.
pub struct TestRunner {
    host: String,
    executor: CommandExecutor,
    probe: Box<dyn ReachabilityProbe>,
    options: RunnerOptions,
}

impl TestRunner {
    /// Runner with the production collaborators: ssh2 sessions and the
    /// system ping probe.
    pub fn new(config: DeviceConfig, options: RunnerOptions) -> Self {
        let host = config.host.clone();
        let provider = SshSessionProvider::new(config);
        Self::with_parts(host, Box::new(provider), Box::new(SystemPingProbe), options)
    }

    /// Runner with injected collaborators.
    pub fn with_parts(
        host: String,
        provider: Box<dyn SessionProvider>,
        probe: Box<dyn ReachabilityProbe>,
        options: RunnerOptions,
    ) -> Self {
        Self {
            host,
            executor: CommandExecutor::new(provider),
            probe,
            options,
        }
    }

    /// Execute the gated sequence and aggregate the verdict.
    ///
    /// Expected session failures (refused, auth, protocol) become a Failed
    /// SSH outcome; unexpected errors abort with no partial report.
    pub fn run(mut self) -> Result<TestReport> {
        let mut outcomes = Vec::new();

        if !self.probe.is_reachable(&self.host) {
            outcomes.push(CheckOutcome::new(checks::PING_TEST, CheckStatus::Failed));
            return Ok(TestReport::from_outcomes(outcomes));
        }
        outcomes.push(CheckOutcome::new(checks::PING_TEST, CheckStatus::Ok));

        match self.executor.connect() {
            Ok(()) => outcomes.push(CheckOutcome::new(checks::SSH_TEST, CheckStatus::Ok)),
            Err(err) if err.is_connection_failure() => {
                outcomes.push(CheckOutcome::new(checks::SSH_TEST, CheckStatus::Failed));
                return Ok(TestReport::from_outcomes(outcomes));
            }
            Err(err) => return Err(err.into()),
        }

        let shapes = self.options.shapes();

        let neighbor_count = checks::full_ospf_interfaces(&mut self.executor, shapes)?;
        outcomes.push(checks::ospf_outcome(neighbor_count));

        let route_found = checks::has_default_route(&mut self.executor, shapes)?;
        outcomes.push(checks::route_outcome(route_found));

        Ok(TestReport::from_outcomes(outcomes))
    }
}
