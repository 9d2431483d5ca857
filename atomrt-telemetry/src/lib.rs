//! # atomrt-telemetry
//!
//! Structured logging for the Atom runtime harness and for hosts that
//! embed the runtime. The runtime core only *emits* `tracing` events;
//! installing a subscriber is this crate's job, so compiled Atom
//! programs that never initialize telemetry pay nothing for it.

pub mod logging;
