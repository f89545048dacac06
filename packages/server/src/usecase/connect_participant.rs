//! UseCase: 参加者の入室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectParticipantUseCase::execute() メソッド
//! - レジストリへの登録と入室システムメッセージの追加
//!
//! ### なぜこのテストが必要か
//! - PresenceRegistry はメッセージを出さないため、入室通知の組み立てはここが担う
//! - 重複した名前では入室通知が追加されないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の入室
//! - 異常系：重複した名前での入室試行

use std::sync::Arc;

use crate::domain::{Participant, ParticipantName};

use super::{
    error::ChatError,
    message_log::{MessageLog, SystemNotice},
    presence_registry::PresenceRegistry,
};

/// 参加者入室のユースケース
pub struct ConnectParticipantUseCase {
    presence: Arc<PresenceRegistry>,
    log: Arc<MessageLog>,
}

impl ConnectParticipantUseCase {
    /// 新しい ConnectParticipantUseCase を作成
    pub fn new(presence: Arc<PresenceRegistry>, log: Arc<MessageLog>) -> Self {
        Self { presence, log }
    }

    /// 入室を実行
    ///
    /// 登録と入室メッセージの追加は 1 つのトランザクションではない。
    /// 入室メッセージの追加に失敗した場合、参加者は登録されたままエラーが返る。
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 入室成功
    /// * `Err(ChatError)` - 入室失敗
    pub async fn execute(&self, name: ParticipantName) -> Result<Participant, ChatError> {
        let participant = self.presence.join(name).await?;

        self.log
            .append_system(&participant.name, SystemNotice::Arrival)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    participant = %participant.name,
                    error = %e,
                    "Joined but failed to append arrival message"
                );
            })?;

        Ok(participant)
    }
}
