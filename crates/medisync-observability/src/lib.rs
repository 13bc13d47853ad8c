//! Structured logging for MediSync workloads.
//!
//! `StructuredLogger` tags every entry with the request id, workload, and
//! route, and writes JSON or human-readable lines to stderr.

mod logging;

pub use logging::*;

pub use medisync_core::{RequestId, TimingContext};
