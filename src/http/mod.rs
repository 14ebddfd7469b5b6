//! HTTP API subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (stamp x-request-id)
//!     → params.rs (validate q/page/size)
//!     → handlers.rs (snapshot lookup, search)
//!     → error.rs (422/502 rendering on failure)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod params;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use handlers::STATUS_LINE;
pub use params::SearchParams;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
