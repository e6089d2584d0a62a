//! Observability wiring.
//!
//! - `init`: tracing subscriber setup from configuration

pub mod init;

pub use init::init_tracing;
