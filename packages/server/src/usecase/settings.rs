//! Room-wide settings injected into the core services.

use std::time::Duration;

use crate::domain::ParticipantName;

/// Default recipient meaning "everyone in the room".
pub const DEFAULT_BROADCAST_TARGET: &str = "Todos";

/// Default time a participant may stay silent before being swept.
pub const DEFAULT_PARTICIPANT_TTL: Duration = Duration::from_secs(10);

/// Default period of the sweeper.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSettings {
    /// Reserved recipient for room-wide messages
    pub broadcast_target: ParticipantName,
    /// A participant whose last heartbeat is at least this old is evicted
    pub participant_ttl: Duration,
    /// How often the sweeper runs
    pub sweep_interval: Duration,
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            broadcast_target: ParticipantName::new(DEFAULT_BROADCAST_TARGET.to_string())
                .expect("default broadcast target is a valid name"),
            participant_ttl: DEFAULT_PARTICIPANT_TTL,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}
