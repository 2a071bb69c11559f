use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single check, and of the whole run.
///
/// Serialized exactly as `"OK"`, `"Partial"` and `"Failed"` — the wire names
/// consumed by downstream acceptance tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    #[serde(rename = "OK")]
    Ok,
    Partial,
    Failed,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "OK"),
            CheckStatus::Partial => write!(f, "Partial"),
            CheckStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// Result of one diagnostic check. Immutable once produced.
///
/// `detail` is only populated for Partial/Failed outcomes that warrant an
/// explanation (e.g. the observed neighbor count); it is omitted from the
/// JSON output when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    #[serde(rename = "test_name")]
    name: String,
    #[serde(rename = "result")]
    status: CheckStatus,
    #[serde(rename = "info", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    detail: Option<String>,
}

impl CheckOutcome {
    pub fn new(name: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            name: name.into(),
            status,
            detail: None,
        }
    }

    pub fn with_detail(
        name: impl Into<String>,
        status: CheckStatus,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            detail: Some(detail.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> CheckStatus {
        self.status
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

/// Aggregate report for one device run.
///
/// Outcome order preserves execution order. The verdict is always computed
/// from the outcomes via [`verdict`]; there is no way to set it
/// independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    #[serde(rename = "tests")]
    outcomes: Vec<CheckOutcome>,
    #[serde(rename = "result")]
    verdict: CheckStatus,
}

impl TestReport {
    pub fn from_outcomes(outcomes: Vec<CheckOutcome>) -> Self {
        let verdict = verdict(&outcomes);
        Self { outcomes, verdict }
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn verdict(&self) -> CheckStatus {
        self.verdict
    }
}

/// Roll a sequence of outcomes into one verdict.
///
/// - every outcome OK -> OK
/// - some but not all OK -> Partial
/// - no OK -> Failed
///
/// Total over any slice. A sequence of only Partial entries yields Failed:
/// partial credit never counts toward the OK tally.
pub fn verdict(outcomes: &[CheckOutcome]) -> CheckStatus {
    let ok = outcomes
        .iter()
        .filter(|o| o.status() == CheckStatus::Ok)
        .count();
    if ok == outcomes.len() && !outcomes.is_empty() {
        CheckStatus::Ok
    } else if ok > 0 {
        CheckStatus::Partial
    } else {
        CheckStatus::Failed
    }
}
