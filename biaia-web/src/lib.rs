//! BIAIA Web - HTTP server and application shell
//!
//! Server-side rendered pages composed by the application shell, plus the
//! JSON places search proxy.

#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]

pub mod errors;
pub mod handlers;
pub mod server;
pub mod shell;
pub mod templates;

// Re-export main types
pub use errors::WebError;
pub use server::{AppState, PLACES_ROUTE, build_router, run_server};
pub use shell::ApplicationShell;
