//! Data transfer objects for the transport layer.

pub mod http;
