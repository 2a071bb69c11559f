use fieldcheck_engine::ReachabilityProbe;

/// Reachability probe with a fixed answer.
pub struct StaticProbe {
    reachable: bool,
}

impl StaticProbe {
    pub fn reachable() -> Self {
        Self { reachable: true }
    }

    pub fn unreachable() -> Self {
        Self { reachable: false }
    }
}

impl ReachabilityProbe for StaticProbe {
    fn is_reachable(&self, _host: &str) -> bool {
        self.reachable
    }
}
