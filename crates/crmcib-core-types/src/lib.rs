//! Core types shared across crmcib facilities
//!
//! This crate provides the canonical field keys and event names used by the
//! logging macros in `crmcib-core` and by the session layer in `crmcib-engine`.

pub mod schema;
