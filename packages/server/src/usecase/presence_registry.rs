//! UseCase: 参加者の在室管理（Presence Registry）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - join / heartbeat / list_active / is_active / sweep_expired
//!
//! ### なぜこのテストが必要か
//! - 同名参加者は同時に 1 人までという不変条件を守る
//! - 期限切れ判定（now - last_seen >= ttl）の境界を保証する
//! - ストア障害が StoreUnavailable としてそのまま呼び出し側に返ることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加、ハートビート、期限切れ参加者の削除
//! - 異常系：重複参加、未登録参加者のハートビート、ストア障害
//! - エッジケース：時間が進まないまま 2 回連続で sweep する

use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::domain::{Clock, Participant, ParticipantName, ParticipantRepository, Timestamp};

use super::error::ChatError;

/// 参加者レコードを排他的に所有するレジストリ
///
/// join / heartbeat / sweep_expired は `lock` で直列化され、
/// 「確認してから更新する」一連の処理が他の呼び出しと交錯しない。
pub struct PresenceRegistry {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ParticipantRepository>,
    clock: Arc<dyn Clock>,
    lock: Mutex<()>,
}

impl PresenceRegistry {
    /// 新しい PresenceRegistry を作成
    pub fn new(repository: Arc<dyn ParticipantRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            lock: Mutex::new(()),
        }
    }

    /// 参加者を登録する（参加もハートビートとして扱う）
    ///
    /// 入室のシステムメッセージはここでは追加しない。
    /// それは [`super::ConnectParticipantUseCase`] の責務。
    ///
    /// # Errors
    ///
    /// * `ChatError::Conflict` - 同名の参加者が既に存在する
    /// * `ChatError::StoreUnavailable` - ストア障害
    pub async fn join(&self, name: ParticipantName) -> Result<Participant, ChatError> {
        let _guard = self.lock.lock().await;

        if self.repository.find_by_name(&name).await?.is_some() {
            tracing::warn!(participant = %name, "Rejected join: name already in use");
            return Err(ChatError::Conflict(name.into_string()));
        }

        let participant = Participant::new(name, self.clock.now());
        self.repository.insert(participant.clone()).await?;
        tracing::info!(participant = %participant.name, "Participant joined");

        Ok(participant)
    }

    /// 最終ハートビート時刻を現在時刻に更新する
    ///
    /// # Errors
    ///
    /// * `ChatError::NotFound` - 未登録の参加者
    /// * `ChatError::StoreUnavailable` - ストア障害
    pub async fn heartbeat(&self, name: &ParticipantName) -> Result<(), ChatError> {
        let _guard = self.lock.lock().await;

        let now = self.clock.now();
        if !self.repository.update_last_seen(name, now).await? {
            tracing::debug!(participant = %name, "Heartbeat from unknown participant");
            return Err(ChatError::NotFound(format!("participant '{name}'")));
        }

        tracing::debug!(participant = %name, last_seen = %now, "Heartbeat");
        Ok(())
    }

    /// 現在登録されている参加者のスナップショット（名前順）
    pub async fn list_active(&self) -> Result<Vec<Participant>, ChatError> {
        let mut participants = self.repository.find_all().await?;
        participants.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(participants)
    }

    /// 参加者が現在登録されているか
    pub async fn is_active(&self, name: &ParticipantName) -> Result<bool, ChatError> {
        Ok(self.repository.find_by_name(name).await?.is_some())
    }

    /// `now - last_seen >= ttl` の参加者を全員削除し、削除した参加者を返す
    ///
    /// 個々の削除に失敗した参加者は登録されたまま残り、次回の sweep で再び対象になる。
    ///
    /// # Errors
    ///
    /// * `ChatError::StoreUnavailable` - 参加者一覧を取得できなかった
    pub async fn sweep_expired(
        &self,
        ttl: Duration,
        now: Timestamp,
    ) -> Result<Vec<Participant>, ChatError> {
        let _guard = self.lock.lock().await;

        let ttl_millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        let expired: Vec<Participant> = self
            .repository
            .find_all()
            .await?
            .into_iter()
            .filter(|p| p.is_expired(now, ttl_millis))
            .collect();

        let mut removed = Vec::with_capacity(expired.len());
        for participant in expired {
            match self.repository.delete_by_name(&participant.name).await {
                Ok(true) => removed.push(participant),
                Ok(false) => {}
                Err(e) => {
                    tracing::error!(
                        participant = %participant.name,
                        error = %e,
                        "Failed to remove expired participant"
                    );
                }
            }
        }

        Ok(removed)
    }
}
