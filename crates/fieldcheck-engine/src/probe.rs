use std::process::{Command, Stdio};

/// Reachability seam. Answers one question: does the device answer an echo?
///
/// Implementations never fail; anything that prevents probing (missing
/// tool, spawn error) is reported as unreachable.
pub trait ReachabilityProbe: Send + Sync {
    fn is_reachable(&self, host: &str) -> bool;
}

/// Probe backed by the OS `ping` tool: one echo request, short timeout,
/// exit status as the answer.
pub struct SystemPingProbe;

impl ReachabilityProbe for SystemPingProbe {
    fn is_reachable(&self, host: &str) -> bool {
        let mut command = Command::new("ping");
        #[cfg(windows)]
        command.args(["-n", "1", "-w", "2000"]);
        #[cfg(not(windows))]
        command.args(["-c", "1", "-W", "2"]);
        command
            .arg(host)
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        command.status().map(|status| status.success()).unwrap_or(false)
    }
}
