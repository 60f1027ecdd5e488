//! Convergence poller
//!
//! After resources have been told to stop, the cluster needs some time to
//! actually stop them. The poller re-reads the document at a fixed delay
//! until every resource is verified stopped or the retry budget is spent.

use crate::accessor::DocumentAccessor;
use crmcib_core::errors::Result;
use crmcib_core::queries::find_resource;
use crmcib_core::{cluster_run_state, Document, RunState};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry budget of a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Extra read cycles after the initial read
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_retries: 10,
            retry_delay: Duration::from_millis(2000),
        }
    }
}

/// How a poll ended; a timeout is an outcome, not an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PollOutcome {
    Converged { extra_reads: u32 },
    TimedOut { extra_reads: u32 },
}

impl PollOutcome {
    pub fn is_converged(&self) -> bool {
        matches!(self, PollOutcome::Converged { .. })
    }

    /// Reads performed after the initial one
    pub fn extra_reads(&self) -> u32 {
        match self {
            PollOutcome::Converged { extra_reads } | PollOutcome::TimedOut { extra_reads } => {
                *extra_reads
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConvergencePoller {
    config: PollConfig,
}

impl ConvergencePoller {
    pub fn new(config: PollConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// Wait until every resource in `ids` is verified stopped
    ///
    /// Ids without a configured primitive are dropped with a warning. The
    /// first read is not counted; after it, at most `max_retries` further
    /// reads are made, `retry_delay` apart.
    ///
    /// # Errors
    ///
    /// Returns `ReadFailed` if any read fails; the poll is abandoned.
    pub fn wait_for_stop<S: AsRef<str>>(&self, accessor: &DocumentAccessor, ids: &[S]) -> Result<PollOutcome> {
        let mut doc = accessor.read()?;

        let pending: Vec<&str> = ids
            .iter()
            .map(AsRef::as_ref)
            .filter(|id| {
                let known = find_resource(&doc, id).is_some();
                if !known {
                    warn!(resource = *id, "Resource not found in the CIB, will be ignored.");
                }
                known
            })
            .collect();
        debug!(resources = ?pending, "waiting for resources to stop");

        let mut retries = 0;
        loop {
            if all_stopped(&doc, &pending) {
                debug!(retries, "the resources are stopped");
                return Ok(PollOutcome::Converged {
                    extra_reads: retries,
                });
            }
            if retries >= self.config.max_retries {
                warn!(retries, "Could not confirm that the resources are stopped");
                return Ok(PollOutcome::TimedOut {
                    extra_reads: retries,
                });
            }

            std::thread::sleep(self.config.retry_delay);
            doc = accessor.read()?;
            retries += 1;
        }
    }
}

fn all_stopped(doc: &Document, ids: &[&str]) -> bool {
    ids.iter()
        .all(|id| cluster_run_state(doc, id) == RunState::Stopped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let converged = PollOutcome::Converged { extra_reads: 0 };
        let timed_out = PollOutcome::TimedOut { extra_reads: 4 };
        assert!(converged.is_converged());
        assert!(!timed_out.is_converged());
        assert_eq!(timed_out.extra_reads(), 4);
    }

    #[test]
    fn test_default_budget() {
        let poller = ConvergencePoller::default();
        assert_eq!(poller.config().max_retries, 10);
        assert_eq!(poller.config().retry_delay, Duration::from_secs(2));
    }
}
