//! Chat room server library.
//!
//! Participants join a single room, exchange broadcast or private messages,
//! and are evicted by a background sweeper once their heartbeat goes stale.
//!
//! Layers, inner to outer:
//! - [`domain`]: value objects, entities, store traits and the clock
//! - [`usecase`]: presence registry, message log, sweeper
//! - [`infrastructure`]: in-memory stores and HTTP DTOs
//! - [`ui`]: axum router, handlers and the server runner

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::{ServerConfig, run as run_server};
