//! Core
//!
//! Configuration, shared server state, and the HTTP server itself.

pub mod config;
pub mod server;
pub mod state;

// Re-exports
pub use config::Config;
pub use server::Server;
pub use state::ServerState;
