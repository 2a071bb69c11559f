//! Orchestration tests: gating, end-to-end scenarios and error
//! classification, all against scripted transport fakes.

use fieldcheck_engine::{checks, Error, RunnerOptions, TestRunner};
use fieldcheck_testing::{fixtures, ConnectFailure, ScriptedProvider, StaticProbe};
use fieldcheck_types::{CheckStatus, TestReport};

fn run(
    provider: ScriptedProvider,
    probe: StaticProbe,
    strict: bool,
) -> fieldcheck_engine::Result<TestReport> {
    TestRunner::with_parts(
        "192.0.2.1".to_string(),
        Box::new(provider),
        Box::new(probe),
        RunnerOptions {
            strict_replies: strict,
        },
    )
    .run()
}

fn statuses(report: &TestReport) -> Vec<CheckStatus> {
    report.outcomes().iter().map(|o| o.status()).collect()
}

fn names(report: &TestReport) -> Vec<&str> {
    report.outcomes().iter().map(|o| o.name()).collect()
}

/// Provider scripted for a fully healthy device: three Full neighbors on
/// three distinct interfaces and an installed default route.
fn healthy_provider() -> ScriptedProvider {
    ScriptedProvider::new()
        .with_xml_reply(
            checks::OSPF_NEIGHBOR_COMMAND,
            fixtures::ospf_reply(&[
                ("ge-0/0/0.0", "Full"),
                ("ge-0/0/1.0", "Full"),
                ("ge-0/0/2.0", "Full"),
            ]),
        )
        .with_xml_reply(checks::DEFAULT_ROUTE_COMMAND, fixtures::route_reply(true))
}

#[test]
fn test_unreachable_device_records_single_failed_outcome() {
    // Scenario A: the ping gate fails, nothing else is attempted.
    let report = run(healthy_provider(), StaticProbe::unreachable(), false).unwrap();

    assert_eq!(names(&report), ["Ping test"]);
    assert_eq!(statuses(&report), [CheckStatus::Failed]);
    assert_eq!(report.verdict(), CheckStatus::Failed);
}

#[test]
fn test_unreachable_device_never_touches_the_transport() {
    let provider = healthy_provider();
    let log = provider.log();

    run(provider, StaticProbe::unreachable(), false).unwrap();

    assert_eq!(log.connect_count(), 0);
    assert!(log.sent_commands().is_empty());
}

#[test]
fn test_refused_session_records_two_outcomes() {
    let report = run(
        ScriptedProvider::failing(ConnectFailure::Refused),
        StaticProbe::reachable(),
        false,
    )
    .unwrap();

    assert_eq!(names(&report), ["Ping test", "SSH Connectivity test"]);
    assert_eq!(statuses(&report), [CheckStatus::Ok, CheckStatus::Failed]);
    // One passing gate out of two outcomes: partial by the aggregation law.
    assert_eq!(report.verdict(), CheckStatus::Partial);
}

#[test]
fn test_auth_and_protocol_failures_are_absorbed_like_refusal() {
    for failure in [ConnectFailure::AuthFailed, ConnectFailure::Protocol] {
        let report = run(
            ScriptedProvider::failing(failure),
            StaticProbe::reachable(),
            false,
        )
        .unwrap();
        assert_eq!(
            statuses(&report),
            [CheckStatus::Ok, CheckStatus::Failed],
            "failure: {:?}",
            failure
        );
    }
}

#[test]
fn test_unexpected_connect_error_aborts_without_report() {
    let err = run(
        ScriptedProvider::failing(ConnectFailure::Io),
        StaticProbe::reachable(),
        false,
    )
    .unwrap_err();

    match err {
        Error::Transport(inner) => assert!(!inner.is_connection_failure()),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[test]
fn test_healthy_device_records_four_ok_outcomes() {
    // Scenario B.
    let report = run(healthy_provider(), StaticProbe::reachable(), false).unwrap();

    assert_eq!(
        names(&report),
        [
            "Ping test",
            "SSH Connectivity test",
            "OSPF Neighbor test",
            "Default route test"
        ]
    );
    assert_eq!(
        statuses(&report),
        [
            CheckStatus::Ok,
            CheckStatus::Ok,
            CheckStatus::Ok,
            CheckStatus::Ok
        ]
    );
    assert_eq!(report.verdict(), CheckStatus::Ok);
}

#[test]
fn test_degraded_device_yields_partial_verdict() {
    // Scenario C: one Full neighbor, no default route.
    let provider = ScriptedProvider::new()
        .with_xml_reply(
            checks::OSPF_NEIGHBOR_COMMAND,
            fixtures::ospf_reply(&[("ge-0/0/0.0", "Full")]),
        )
        .with_xml_reply(checks::DEFAULT_ROUTE_COMMAND, fixtures::route_reply(false));

    let report = run(provider, StaticProbe::reachable(), false).unwrap();

    assert_eq!(
        statuses(&report),
        [
            CheckStatus::Ok,
            CheckStatus::Ok,
            CheckStatus::Partial,
            CheckStatus::Failed
        ]
    );
    assert_eq!(report.verdict(), CheckStatus::Partial);
    assert_eq!(
        report.outcomes()[2].detail(),
        Some("Found 1 OSPF neighbor. Requires 2 or more to pass test")
    );
    assert_eq!(report.outcomes()[3].detail(), None);
}

#[test]
fn test_duplicate_neighbor_entries_count_one_interface() {
    // Two Full entries on the same interface are one adjacency-bearing
    // interface: partial, not passing.
    let provider = ScriptedProvider::new()
        .with_xml_reply(
            checks::OSPF_NEIGHBOR_COMMAND,
            fixtures::ospf_reply(&[("ge-0/0/0.0", "Full"), ("ge-0/0/0.0", "Full")]),
        )
        .with_xml_reply(checks::DEFAULT_ROUTE_COMMAND, fixtures::route_reply(true));

    let report = run(provider, StaticProbe::reachable(), false).unwrap();
    assert_eq!(report.outcomes()[2].status(), CheckStatus::Partial);
}

#[test]
fn test_neighbors_are_counted_across_instances() {
    let provider = ScriptedProvider::new()
        .with_xml_reply(
            checks::OSPF_NEIGHBOR_COMMAND,
            fixtures::ospf_reply_instances(&[
                ("master", &[("ge-0/0/0.0", "Full")]),
                ("customer-vrf", &[("ge-0/0/1.0", "Full")]),
            ]),
        )
        .with_xml_reply(checks::DEFAULT_ROUTE_COMMAND, fixtures::route_reply(true));

    let report = run(provider, StaticProbe::reachable(), false).unwrap();
    assert_eq!(report.outcomes()[2].status(), CheckStatus::Ok);
}

#[test]
fn test_non_full_adjacencies_do_not_count() {
    let provider = ScriptedProvider::new()
        .with_xml_reply(
            checks::OSPF_NEIGHBOR_COMMAND,
            fixtures::ospf_reply(&[
                ("ge-0/0/0.0", "Full"),
                ("ge-0/0/1.0", "2Way"),
                ("ge-0/0/2.0", "Init"),
            ]),
        )
        .with_xml_reply(checks::DEFAULT_ROUTE_COMMAND, fixtures::route_reply(true));

    let report = run(provider, StaticProbe::reachable(), false).unwrap();
    assert_eq!(report.outcomes()[2].status(), CheckStatus::Partial);
    assert_eq!(
        report.outcomes()[2].detail(),
        Some("Found 1 OSPF neighbor. Requires 2 or more to pass test")
    );
}

#[test]
fn test_missing_envelopes_read_as_negatives_by_default() {
    let provider = ScriptedProvider::new()
        .with_xml_reply(checks::OSPF_NEIGHBOR_COMMAND, fixtures::OSPF_REPLY_NO_ENVELOPE)
        .with_xml_reply(checks::DEFAULT_ROUTE_COMMAND, fixtures::ROUTE_REPLY_NO_ENVELOPE);

    let report = run(provider, StaticProbe::reachable(), false).unwrap();

    assert_eq!(
        statuses(&report),
        [
            CheckStatus::Ok,
            CheckStatus::Ok,
            CheckStatus::Failed,
            CheckStatus::Failed
        ]
    );
    assert_eq!(report.outcomes()[2].detail(), Some("Found 0 OSPF neighbors."));
    assert_eq!(report.verdict(), CheckStatus::Partial);
}

#[test]
fn test_strict_replies_turn_missing_envelope_into_error() {
    let provider = ScriptedProvider::new()
        .with_xml_reply(checks::OSPF_NEIGHBOR_COMMAND, fixtures::OSPF_REPLY_NO_ENVELOPE)
        .with_xml_reply(checks::DEFAULT_ROUTE_COMMAND, fixtures::route_reply(true));

    let err = run(provider, StaticProbe::reachable(), true).unwrap_err();

    match err {
        Error::MissingField { command, field } => {
            assert_eq!(command, checks::OSPF_NEIGHBOR_COMMAND);
            assert_eq!(field, "ospf-neighbor-information-all");
        }
        other => panic!("expected MissingField, got {:?}", other),
    }
}

#[test]
fn test_strict_replies_accept_well_formed_negatives() {
    // An empty-but-present envelope is "checked, negative" even in strict
    // mode; only the absent envelope is a shape error.
    let provider = ScriptedProvider::new()
        .with_xml_reply(
            checks::OSPF_NEIGHBOR_COMMAND,
            "<rpc-reply><ospf-neighbor-information-all></ospf-neighbor-information-all></rpc-reply>",
        )
        .with_xml_reply(checks::DEFAULT_ROUTE_COMMAND, fixtures::route_reply(false));

    let report = run(provider, StaticProbe::reachable(), true).unwrap();
    assert_eq!(
        statuses(&report),
        [
            CheckStatus::Ok,
            CheckStatus::Ok,
            CheckStatus::Failed,
            CheckStatus::Failed
        ]
    );
}

#[test]
fn test_one_session_serves_both_remote_checks() {
    let provider = healthy_provider();
    let log = provider.log();

    run(provider, StaticProbe::reachable(), false).unwrap();

    assert_eq!(log.connect_count(), 1);
    assert_eq!(
        log.sent_commands(),
        [
            "show ospf neighbor instance all | display xml",
            "show route 0.0.0.0/0 exact | display xml"
        ]
    );
}
