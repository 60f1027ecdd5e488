//! Session-level CIB operations with boundary logging
//!
//! Every operation performs its own fresh read; documents are never kept
//! between calls. Mutating operations commit the whole document back.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The core crate logs internal details at `debug`/`warn` only.

use crate::accessor::DocumentAccessor;
use crate::config::EngineConfig;
use crate::poller::{ConvergencePoller, PollConfig, PollOutcome};
use crmcib_core::errors::Result;
use crmcib_core::queries::{self, find_resource};
use crmcib_core::{
    apply, cluster_run_state, dissolve_constraints, log_op_end, log_op_error, log_op_start,
    node_of_resource, ClusterProperty, Command, Dissolution, Document, Node, NodeState, RunState,
};
use std::time::Instant;

pub struct CibClient {
    accessor: DocumentAccessor,
    poller: ConvergencePoller,
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

impl CibClient {
    pub fn new(accessor: DocumentAccessor, poll: PollConfig) -> Self {
        Self {
            accessor,
            poller: ConvergencePoller::new(poll),
        }
    }

    /// Client running the configured utility
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(DocumentAccessor::cibadmin(config), config.poll_config())
    }

    pub fn accessor(&self) -> &DocumentAccessor {
        &self.accessor
    }

    /// Fetch a fresh document
    ///
    /// # Errors
    ///
    /// Returns `ReadFailed` if the document cannot be fetched.
    pub fn read(&self) -> Result<Document> {
        self.accessor.read()
    }

    /// Replace the cluster's document
    ///
    /// # Errors
    ///
    /// Returns `CommitFailed` if the cluster rejects the document.
    pub fn commit(&self, doc: &Document) -> Result<()> {
        self.accessor.commit(Some(doc))
    }

    /// Read, apply one command, commit
    ///
    /// # Errors
    ///
    /// Returns the read, mutation or commit error. A failed mutation commits
    /// nothing.
    pub fn execute(&self, command: &Command) -> Result<()> {
        let op = command.op_name();
        log_op_start!(op, entity_id = command.entity_id());
        let start = Instant::now();

        self.execute_impl(command).map_err(|e| {
            log_op_error!(op, &e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!(op, duration_ms = elapsed_ms(start));
        Ok(())
    }

    fn execute_impl(&self, command: &Command) -> Result<()> {
        let doc = apply(self.accessor.read()?, command)?;
        self.accessor.commit(Some(&doc))
    }

    /// Set `target-role` to `Started`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if there is no such primitive.
    pub fn start_resource(&self, resource_id: &str) -> Result<()> {
        self.execute(&Command::SetTargetRole {
            resource_id: resource_id.to_string(),
            started: true,
        })
    }

    /// Set `target-role` to `Stopped`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if there is no such primitive.
    pub fn stop_resource(&self, resource_id: &str) -> Result<()> {
        self.execute(&Command::SetTargetRole {
            resource_id: resource_id.to_string(),
            started: false,
        })
    }

    /// # Errors
    ///
    /// Returns `NodeNotFound` if no node has that uname.
    pub fn standby_node(&self, uname: &str) -> Result<()> {
        self.execute(&Command::SetStandby {
            uname: uname.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns `NodeNotFound` if no node has that uname.
    pub fn unstandby_node(&self, uname: &str) -> Result<()> {
        self.execute(&Command::ClearStandby {
            uname: uname.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns the read or commit error.
    pub fn set_cluster_property(&self, property: &ClusterProperty, value: &str) -> Result<()> {
        self.execute(&Command::SetClusterProperty {
            property: property.clone(),
            value: value.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns the read or commit error.
    pub fn set_stonith_enabled(&self, enabled: bool) -> Result<()> {
        let value = if enabled { "true" } else { "false" };
        self.set_cluster_property(&ClusterProperty::StonithEnabled, value)
    }

    /// # Errors
    ///
    /// Returns the read or commit error.
    pub fn set_cluster_name(&self, name: &str) -> Result<()> {
        self.set_cluster_property(&ClusterProperty::ClusterName, name)
    }

    /// # Errors
    ///
    /// Returns `ReadFailed`, or `MissingRoot` for a document without `<cib>`.
    pub fn cluster_property(&self, property: &ClusterProperty) -> Result<String> {
        queries::cluster_property(&self.read()?, property)
    }

    /// # Errors
    ///
    /// Returns `ReadFailed`, or `InvalidPropertyValue` for a non-boolean value.
    pub fn stonith_enabled(&self) -> Result<Option<bool>> {
        queries::stonith_enabled(&self.read()?)
    }

    /// # Errors
    ///
    /// Returns `ReadFailed`, or `MissingRoot` for a document without `<cib>`.
    pub fn cluster_name(&self) -> Result<String> {
        queries::cluster_name(&self.read()?)
    }

    /// # Errors
    ///
    /// Returns `ReadFailed` or `NodeNotFound`.
    pub fn is_standby(&self, uname: &str) -> Result<bool> {
        queries::is_standby(&self.read()?, uname)
    }

    /// # Errors
    ///
    /// Returns `ReadFailed`, `NodeStateNotFound` or a node state parse error.
    pub fn find_node_state(&self, uname: &str) -> Result<NodeState> {
        queries::find_node_state(&self.read()?, uname)
    }

    /// # Errors
    ///
    /// Returns `ReadFailed` or the first node state parse error.
    pub fn list_nodes(&self) -> Result<Vec<Node>> {
        queries::list_nodes(&self.read()?)
    }

    /// Whether a primitive with this id is configured
    ///
    /// # Errors
    ///
    /// Returns `ReadFailed` if the document cannot be fetched.
    pub fn resource_exists(&self, resource_id: &str) -> Result<bool> {
        Ok(find_resource(&self.read()?, resource_id).is_some())
    }

    /// Cluster-wide run state of a resource
    ///
    /// # Errors
    ///
    /// Returns `ReadFailed` if the document cannot be fetched.
    pub fn resource_run_state(&self, resource_id: &str) -> Result<RunState> {
        Ok(cluster_run_state(&self.read()?, resource_id))
    }

    /// Host name of the first node running the resource
    ///
    /// # Errors
    ///
    /// Returns `ReadFailed` if the document cannot be fetched.
    pub fn node_of_resource(&self, resource_id: &str) -> Result<Option<String>> {
        Ok(node_of_resource(&self.read()?, resource_id))
    }

    /// Pipe an XML fragment into the create command
    ///
    /// # Errors
    ///
    /// Returns `CreateFailed` if the cluster rejects the fragment.
    pub fn create_resource(&self, xml: &str) -> Result<()> {
        log_op_start!("create_resource");
        let start = Instant::now();

        self.accessor.create(xml).map_err(|e| {
            log_op_error!("create_resource", &e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!("create_resource", duration_ms = elapsed_ms(start));
        Ok(())
    }

    /// Remove every constraint and status record naming `resources`, then commit
    ///
    /// # Errors
    ///
    /// Returns the read or commit error.
    pub fn dissolve_constraints<S: AsRef<str>>(&self, resources: &[S]) -> Result<Dissolution> {
        log_op_start!("dissolve_constraints", resources = resources.len());
        let start = Instant::now();

        let dissolution = self.dissolve_constraints_impl(resources).map_err(|e| {
            log_op_error!("dissolve_constraints", &e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!(
            "dissolve_constraints",
            duration_ms = elapsed_ms(start),
            removed = dissolution.len()
        );
        Ok(dissolution)
    }

    fn dissolve_constraints_impl<S: AsRef<str>>(&self, resources: &[S]) -> Result<Dissolution> {
        let mut doc = self.accessor.read()?;
        let dissolution = dissolve_constraints(&mut doc, resources)?;
        self.accessor.commit(Some(&doc))?;
        Ok(dissolution)
    }

    /// Wait until every resource in `ids` is verified stopped
    ///
    /// # Errors
    ///
    /// Returns `ReadFailed` if any read fails; a timeout is a `TimedOut`
    /// outcome, not an error.
    pub fn wait_for_resources_stop<S: AsRef<str>>(&self, ids: &[S]) -> Result<PollOutcome> {
        log_op_start!("wait_for_resources_stop", resources = ids.len());
        let start = Instant::now();

        let outcome = self.poller.wait_for_stop(&self.accessor, ids).map_err(|e| {
            log_op_error!("wait_for_resources_stop", &e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!(
            "wait_for_resources_stop",
            duration_ms = elapsed_ms(start),
            converged = outcome.is_converged(),
            extra_reads = outcome.extra_reads()
        );
        Ok(outcome)
    }
}
