//! InMemory Participant Repository 実装
//!
//! ドメイン層が定義する ParticipantRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。キーは参加者名です。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Participant, ParticipantName, ParticipantRepository, RepositoryError, Timestamp,
};

/// インメモリ Participant Repository 実装
#[derive(Default)]
pub struct InMemoryParticipantRepository {
    participants: Mutex<HashMap<ParticipantName, Participant>>,
}

impl InMemoryParticipantRepository {
    /// 新しい InMemoryParticipantRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.get(name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.values().cloned().collect())
    }

    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        participants.insert(participant.name.clone(), participant);
        Ok(())
    }

    async fn update_last_seen(
        &self,
        name: &ParticipantName,
        last_seen: Timestamp,
    ) -> Result<bool, RepositoryError> {
        let mut participants = self.participants.lock().await;
        match participants.get_mut(name) {
            Some(participant) => {
                participant.last_seen = last_seen;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_name(&self, name: &ParticipantName) -> Result<bool, RepositoryError> {
        let mut participants = self.participants.lock().await;
        Ok(participants.remove(name).is_some())
    }
}
