//! The check library: each check is a pure function of the command executor
//! (or the reachability probe) returning a classification signal. The gated
//! sequencing lives in [`crate::runner`]; nothing in here knows about order.

use crate::error::{Error, Result};
use fieldcheck_transport::CommandExecutor;
use fieldcheck_types::{CheckOutcome, CheckStatus};
use serde_json::Value;
use std::collections::HashSet;

pub const PING_TEST: &str = "Ping test";
pub const SSH_TEST: &str = "SSH Connectivity test";
pub const OSPF_TEST: &str = "OSPF Neighbor test";
pub const ROUTE_TEST: &str = "Default route test";

pub const OSPF_NEIGHBOR_COMMAND: &str = "show ospf neighbor instance all";
pub const DEFAULT_ROUTE_COMMAND: &str = "show route 0.0.0.0/0 exact";

/// How to treat a reply that lacks an expected envelope key.
///
/// Lenient preserves the historical behavior: absence reads as a benign
/// negative (no neighbors, no route). Strict turns it into
/// [`Error::MissingField`], distinguishing "checked, negative" from "could
/// not check" when device firmware changes its output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeHandling {
    #[default]
    Lenient,
    Strict,
}

/// Count the distinct interfaces carrying an OSPF neighbor in the Full
/// adjacency state, across all routing instances.
///
/// A neighbor may be reported more than once per interface (and per
/// instance); uniqueness is by interface name.
pub fn full_ospf_interfaces(
    executor: &mut CommandExecutor,
    shapes: ShapeHandling,
) -> Result<usize> {
    let reply = executor.execute(OSPF_NEIGHBOR_COMMAND)?;

    let Some(info) = reply.get("ospf-neighbor-information-all") else {
        return match shapes {
            ShapeHandling::Lenient => Ok(0),
            ShapeHandling::Strict => Err(Error::MissingField {
                command: OSPF_NEIGHBOR_COMMAND.to_string(),
                field: "ospf-neighbor-information-all".to_string(),
            }),
        };
    };

    let mut interfaces = HashSet::new();
    for instance in entries(info.get("ospf-instance-neighbor")) {
        for neighbor in entries(instance.get("ospf-neighbor")) {
            if neighbor.get("ospf-neighbor-state").and_then(Value::as_str) != Some("Full") {
                continue;
            }
            if let Some(name) = neighbor.get("interface-name").and_then(Value::as_str) {
                interfaces.insert(name.to_string());
            }
        }
    }
    Ok(interfaces.len())
}

/// Whether an IPv4 default route is installed: true iff the exact-match
/// lookup returns a populated route table under the route-information
/// envelope.
pub fn has_default_route(
    executor: &mut CommandExecutor,
    shapes: ShapeHandling,
) -> Result<bool> {
    let reply = executor.execute(DEFAULT_ROUTE_COMMAND)?;

    match reply.get("route-information") {
        Some(info) => Ok(info.get("route-table").is_some()),
        None => match shapes {
            ShapeHandling::Lenient => Ok(false),
            ShapeHandling::Strict => Err(Error::MissingField {
                command: DEFAULT_ROUTE_COMMAND.to_string(),
                field: "route-information".to_string(),
            }),
        },
    }
}

/// Classify a distinct-Full-interface count: two or more neighbors pass,
/// exactly one is a degraded topology, none fails.
pub fn ospf_outcome(count: usize) -> CheckOutcome {
    match count {
        0 => CheckOutcome::with_detail(OSPF_TEST, CheckStatus::Failed, "Found 0 OSPF neighbors."),
        1 => CheckOutcome::with_detail(
            OSPF_TEST,
            CheckStatus::Partial,
            "Found 1 OSPF neighbor. Requires 2 or more to pass test",
        ),
        _ => CheckOutcome::new(OSPF_TEST, CheckStatus::Ok),
    }
}

pub fn route_outcome(found: bool) -> CheckOutcome {
    if found {
        CheckOutcome::new(ROUTE_TEST, CheckStatus::Ok)
    } else {
        CheckOutcome::new(ROUTE_TEST, CheckStatus::Failed)
    }
}

/// View a reply fragment as a sequence: XML-to-dict collapses a single
/// occurrence to an object and folds repeats into an array, so consumers
/// must accept both. Null/absent reads as empty.
fn entries(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(single) => vec![single],
    }
}
