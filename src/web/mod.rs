//! Presentation shell.
//!
//! Serves the embedded single-page UI and the two-endpoint JSON API the
//! dropdown drives.

mod server;

pub use server::{router, serve, AppState};
