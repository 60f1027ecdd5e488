mod common;

use common::{fast_poll, stopped_cib, FakeCluster, CLUSTER_CIB};
use crmcib_core::CibError;
use crmcib_engine::{CommandFailure, ConvergencePoller, PollOutcome, ScriptedRunner};

#[test]
fn test_immediate_convergence_needs_no_extra_reads() {
    let cluster = FakeCluster::serving(&stopped_cib());
    let outcome = cluster.client(5).wait_for_resources_stop(&["p_nfs", "p_fs"]).unwrap();

    assert_eq!(outcome, PollOutcome::Converged { extra_reads: 0 });
    assert_eq!(cluster.query.call_count(), 1);
}

#[test]
fn test_never_stopping_times_out_after_budget() {
    let cluster = FakeCluster::serving(CLUSTER_CIB);
    let outcome = cluster.client(3).wait_for_resources_stop(&["p_nfs"]).unwrap();

    assert_eq!(outcome, PollOutcome::TimedOut { extra_reads: 3 });
    assert!(!outcome.is_converged());
    assert_eq!(cluster.query.call_count(), 4);
}

#[test]
fn test_zero_budget_times_out_on_first_read() {
    let cluster = FakeCluster::serving(CLUSTER_CIB);
    let outcome = cluster.client(0).wait_for_resources_stop(&["p_nfs"]).unwrap();
    assert_eq!(outcome, PollOutcome::TimedOut { extra_reads: 0 });
    assert_eq!(cluster.query.call_count(), 1);
}

#[test]
fn test_converges_once_cluster_catches_up() {
    let query = ScriptedRunner::with_responses(vec![
        Ok(CLUSTER_CIB.to_string()),
        Ok(CLUSTER_CIB.to_string()),
    ])
    .repeating(Ok(stopped_cib()));
    let cluster = FakeCluster::with_query(query);

    let outcome = cluster.client(10).wait_for_resources_stop(&["p_nfs"]).unwrap();
    assert_eq!(outcome, PollOutcome::Converged { extra_reads: 2 });
    assert_eq!(cluster.query.call_count(), 3);
}

#[test]
fn test_unknown_ids_are_ignored() {
    let cluster = FakeCluster::serving(&stopped_cib());
    let outcome = cluster
        .client(2)
        .wait_for_resources_stop(&["p_nfs", "p_deleted_meanwhile"])
        .unwrap();
    assert!(outcome.is_converged());

    // nothing left to wait for
    let cluster = FakeCluster::serving(CLUSTER_CIB);
    let outcome = cluster.client(2).wait_for_resources_stop(&["p_gone"]).unwrap();
    assert_eq!(outcome, PollOutcome::Converged { extra_reads: 0 });
}

#[test]
fn test_read_failure_aborts_poll() {
    let query = ScriptedRunner::with_responses(vec![Ok(CLUSTER_CIB.to_string())])
        .repeating(Err(CommandFailure::new(Some(102), "connection lost")));
    let cluster = FakeCluster::with_query(query);

    let err = cluster.client(5).wait_for_resources_stop(&["p_nfs"]).unwrap_err();
    assert_eq!(err, CibError::ReadFailed);
    assert_eq!(cluster.query.call_count(), 2);
}

#[test]
fn test_poller_used_directly() {
    let cluster = FakeCluster::serving(CLUSTER_CIB);
    let poller = ConvergencePoller::new(fast_poll(1));
    let ids = vec!["p_fs".to_string()];

    let outcome = poller.wait_for_stop(&cluster.accessor(), &ids).unwrap();
    assert_eq!(outcome.extra_reads(), 1);
    assert!(!outcome.is_converged());
}
