//! Observability subsystem.
//!
//! Every component logs through `tracing` with structured fields; the
//! binary installs the subscriber once at startup.

pub mod logging;

pub use logging::init_logging;
