//! crmcib engine - talks to the cluster
//!
//! Wraps the `cibadmin` utility behind a [`runner::CommandRunner`] seam and
//! builds the session-level operations on top of it: every operation reads a
//! fresh document, queries or mutates it with `crmcib-core`, and commits it
//! back when it changed anything.

pub mod accessor;
pub mod client;
pub mod config;
pub mod poller;
pub mod runner;

pub use accessor::DocumentAccessor;
pub use client::CibClient;
pub use config::{EngineConfig, PollSettings};
pub use poller::{ConvergencePoller, PollConfig, PollOutcome};
pub use runner::{CommandFailure, CommandRunner, CrmCommand, ScriptedRunner};
