//! Server state shared by every handler.

use std::sync::Arc;

use crate::{
    domain::{Clock, MessageRepository, ParticipantRepository},
    infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
    usecase::{ConnectParticipantUseCase, MessageLog, PresenceRegistry, RoomSettings, Sweeper},
};

/// Shared application state
pub struct AppState {
    pub presence: Arc<PresenceRegistry>,
    pub log: Arc<MessageLog>,
    pub connect: ConnectParticipantUseCase,
    pub sweeper: Arc<Sweeper>,
}

impl AppState {
    /// Wire the core services on top of the given stores
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
        settings: &RoomSettings,
    ) -> Self {
        let presence = Arc::new(PresenceRegistry::new(participants, clock.clone()));
        let log = Arc::new(MessageLog::new(
            messages,
            presence.clone(),
            clock.clone(),
            settings.broadcast_target.clone(),
        ));
        let connect = ConnectParticipantUseCase::new(presence.clone(), log.clone());
        let sweeper = Arc::new(Sweeper::new(presence.clone(), log.clone(), clock, settings));

        Self {
            presence,
            log,
            connect,
            sweeper,
        }
    }

    /// State backed by the in-memory stores
    pub fn in_memory(clock: Arc<dyn Clock>, settings: &RoomSettings) -> Self {
        Self::new(
            Arc::new(InMemoryParticipantRepository::new()),
            Arc::new(InMemoryMessageRepository::new()),
            clock,
            settings,
        )
    }
}
