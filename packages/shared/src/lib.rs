//! Shared utilities for Roomly binaries and libraries.

pub mod logger;
pub mod time;
