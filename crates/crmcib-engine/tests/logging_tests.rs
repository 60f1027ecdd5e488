#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{FakeCluster, CLUSTER_CIB};
use crmcib_core::logging_facility::test_capture::init_test_capture;
use crmcib_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ENTITY_ID, FIELD_ERR_CODE,
};

#[test]
fn test_session_operation_emits_boundary_events() {
    let capture = init_test_capture();
    let cluster = FakeCluster::serving(CLUSTER_CIB);

    cluster.client(0).stop_resource("p_fs").unwrap();

    let events = capture.events_for_op("stop_resource");
    assert!(events.iter().any(|e| e.event.as_deref() == Some(EVENT_START)
        && e.field(FIELD_ENTITY_ID) == Some("p_fs")));
    assert!(events.iter().any(|e| e.event.as_deref() == Some(EVENT_END)
        && e.field(FIELD_DURATION_MS).is_some()));
}

#[test]
fn test_failed_operation_emits_error_code() {
    let capture = init_test_capture();
    let cluster = FakeCluster::serving(CLUSTER_CIB);

    cluster.client(0).unstandby_node("li_logging_unique").unwrap_err();

    let errors: Vec<_> = capture
        .events_for_op("unstandby_node")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert!(errors.iter().any(|e| e.field(FIELD_ERR_CODE) == Some("ERR_NOT_FOUND")
        && e.field(FIELD_ENTITY_ID) == Some("li_logging_unique")));
}

#[test]
fn test_poll_end_reports_outcome() {
    let capture = init_test_capture();
    let cluster = FakeCluster::serving(CLUSTER_CIB);

    cluster.client(1).wait_for_resources_stop(&["p_nfs"]).unwrap();

    let ends: Vec<_> = capture
        .events_for_op("wait_for_resources_stop")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert!(ends
        .iter()
        .any(|e| e.field("converged") == Some("false") && e.field("extra_reads") == Some("1")));
}
