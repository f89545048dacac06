//! Server configuration.

use std::{net::SocketAddr, time::Duration};

use clap::Parser;

use crate::{
    domain::{ParticipantName, ValueObjectError},
    usecase::{
        RoomSettings,
        settings::{DEFAULT_BROADCAST_TARGET, DEFAULT_PARTICIPANT_TTL, DEFAULT_SWEEP_INTERVAL},
    },
};

/// Command line (and environment) configuration of the server
#[derive(Debug, Clone, Parser)]
#[command(name = "roomly-server", version, about = "Chat room server with presence expiry")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "ROOMLY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "ROOMLY_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Seconds without heartbeat before a participant is evicted
    #[arg(
        long,
        env = "ROOMLY_PARTICIPANT_TTL_SECS",
        default_value_t = DEFAULT_PARTICIPANT_TTL.as_secs()
    )]
    pub participant_ttl_secs: u64,

    /// Seconds between two sweeps
    #[arg(
        long,
        env = "ROOMLY_SWEEP_INTERVAL_SECS",
        default_value_t = DEFAULT_SWEEP_INTERVAL.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub sweep_interval_secs: u64,

    /// Recipient name meaning "everyone"
    #[arg(long, env = "ROOMLY_BROADCAST_TARGET", default_value = DEFAULT_BROADCAST_TARGET)]
    pub broadcast_target: String,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "ROOMLY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// Parse `host:port`
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Room settings injected into the core services
    pub fn room_settings(&self) -> Result<RoomSettings, ValueObjectError> {
        Ok(RoomSettings {
            broadcast_target: ParticipantName::new(self.broadcast_target.clone())?,
            participant_ttl: Duration::from_secs(self.participant_ttl_secs),
            sweep_interval: Duration::from_secs(self.sweep_interval_secs),
        })
    }
}
