//! Observability setup for the engine.
//!
//! The engine logs through `tracing`: startup and shutdown at `info`,
//! per-request payloads at `debug`, rejected operations and recovered
//! persistence corruption at `warn`. Control verbosity with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run    # operation outcomes
//! RUST_LOG=debug cargo run   # full request payloads
//! ```

/// Initializes the global subscriber. Call once at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
