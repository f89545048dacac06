//! HTTP chat room server.

pub mod config;
mod error;
mod extract;
mod handler;
mod router;
mod runner;
mod signal;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::build_router;
pub use runner::{run, serve};
