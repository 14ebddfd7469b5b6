//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Build client → Prefetch snapshot (startup mode) → AppState + fetcher
//!     (the fetcher owns the client handle; the caller holds it until stop)
//!
//! Shutdown (shutdown.rs):
//!     trigger() → broadcast → server drains in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM / Ctrl+C → trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then upstream, then listener
//! - A failed prefetch aborts the boot; the listener never opens half-ready

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{initialize, StartupError};
