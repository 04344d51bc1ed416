//! Server core: configuration, shared state, bootstrap

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use state::ServerState;
