//! UseCase: メッセージログ（Message Log）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - append / append_system / list / edit / delete
//!
//! ### なぜこのテストが必要か
//! - アクティブでない参加者は送信できないことを保証
//! - 個人宛メッセージの可視性ルールを保証
//! - 編集・削除は送信者本人のみ、システムメッセージは不可であることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：送信、一覧取得、本人による編集・削除
//! - 異常系：未参加者の送信、他人による編集・削除、存在しない ID
//! - エッジケース：limit で切り出してからフィルタするため件数が limit 未満になる

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    Clock, Message, MessageId, MessageKind, MessageRepository, MessageText, NewMessage,
    ParticipantName,
};

use super::{
    command::{EditMessageCommand, SendMessageCommand},
    error::ChatError,
    presence_registry::PresenceRegistry,
};

/// 参加者に代わってコアが書き込むシステム通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemNotice {
    /// 入室
    Arrival,
    /// 退室（Sweeper による削除）
    Departure,
}

impl SystemNotice {
    /// 通知の本文
    pub fn text(&self) -> &'static str {
        match self {
            SystemNotice::Arrival => "entered the room...",
            SystemNotice::Departure => "left the room...",
        }
    }
}

/// メッセージレコードを排他的に所有するログ
pub struct MessageLog {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MessageRepository>,
    /// 送信者がアクティブかどうかの問い合わせ先
    presence: Arc<PresenceRegistry>,
    clock: Arc<dyn Clock>,
    broadcast_target: ParticipantName,
    /// edit / delete の確認と更新を直列化する
    lock: Mutex<()>,
}

impl MessageLog {
    /// 新しい MessageLog を作成
    pub fn new(
        repository: Arc<dyn MessageRepository>,
        presence: Arc<PresenceRegistry>,
        clock: Arc<dyn Clock>,
        broadcast_target: ParticipantName,
    ) -> Self {
        Self {
            repository,
            presence,
            clock,
            broadcast_target,
            lock: Mutex::new(()),
        }
    }

    /// 参加者のメッセージを追加する
    ///
    /// 宛先 `to` はレジストリと照合しない。退室済みの名前宛でも保存される。
    ///
    /// # Errors
    ///
    /// * `ChatError::Unauthorized` - 種別が system、または送信者がアクティブでない
    /// * `ChatError::StoreUnavailable` - ストア障害
    pub async fn append(&self, command: SendMessageCommand) -> Result<Message, ChatError> {
        if command.kind == MessageKind::System {
            return Err(ChatError::Unauthorized(
                "system messages cannot be sent by participants".to_string(),
            ));
        }

        if !self.presence.is_active(&command.from).await? {
            tracing::warn!(from = %command.from, "Rejected message from inactive participant");
            return Err(ChatError::Unauthorized(format!(
                "'{}' is not in the room",
                command.from
            )));
        }

        let message = self
            .repository
            .insert(NewMessage {
                from: command.from,
                to: command.to,
                text: command.text,
                kind: command.kind,
                time: self.display_time(),
            })
            .await?;

        tracing::debug!(
            id = %message.id,
            from = %message.from,
            to = %message.to,
            kind = %message.kind,
            "Message appended"
        );
        Ok(message)
    }

    /// システムメッセージ（入室・退室）を追加する
    ///
    /// 対象の参加者は参加直後か削除直後なので、アクティブ判定は行わない。
    pub async fn append_system(
        &self,
        actor: &ParticipantName,
        notice: SystemNotice,
    ) -> Result<Message, ChatError> {
        let message = self
            .repository
            .insert(NewMessage {
                from: actor.clone(),
                to: self.broadcast_target.clone(),
                text: MessageText::from_static(notice.text()),
                kind: MessageKind::System,
                time: self.display_time(),
            })
            .await?;

        tracing::debug!(id = %message.id, actor = %actor, ?notice, "System message appended");
        Ok(message)
    }

    /// `viewer` から見えるメッセージを返す
    ///
    /// 直近 `limit` 件を切り出してからフィルタする。そのため、閲覧者に見える
    /// メッセージがそれより前に残っていても、結果は `limit` 件未満になり得る。
    /// `limit` が `None` または 0 の場合はログ全体が対象。
    pub async fn list(
        &self,
        viewer: Option<&ParticipantName>,
        limit: Option<usize>,
    ) -> Result<Vec<Message>, ChatError> {
        let mut messages = self.repository.find_all().await?;

        let start = match limit {
            Some(n) if n > 0 => messages.len().saturating_sub(n),
            _ => 0,
        };
        let recent = messages.split_off(start);

        Ok(recent
            .into_iter()
            .filter(|m| m.is_visible_to(viewer, &self.broadcast_target))
            .collect())
    }

    /// 本人のメッセージ本文を置き換える（ID と時刻は変わらない）
    ///
    /// # Errors
    ///
    /// * `ChatError::NotFound` - メッセージが存在しない
    /// * `ChatError::Unauthorized` - 送信者本人でない、またはシステムメッセージ
    /// * `ChatError::StoreUnavailable` - ストア障害
    pub async fn edit(&self, command: EditMessageCommand) -> Result<Message, ChatError> {
        let _guard = self.lock.lock().await;

        let mut message = self.find_owned(&command.id, &command.requestor).await?;
        if !self
            .repository
            .update_text(&command.id, command.text.clone())
            .await?
        {
            return Err(not_found(&command.id));
        }

        message.text = command.text;
        tracing::debug!(id = %message.id, requestor = %command.requestor, "Message edited");
        Ok(message)
    }

    /// 本人のメッセージを削除する
    ///
    /// # Errors
    ///
    /// edit と同じ
    pub async fn delete(
        &self,
        id: &MessageId,
        requestor: &ParticipantName,
    ) -> Result<(), ChatError> {
        let _guard = self.lock.lock().await;

        self.find_owned(id, requestor).await?;
        if !self.repository.delete_by_id(id).await? {
            return Err(not_found(id));
        }

        tracing::debug!(id = %id, requestor = %requestor, "Message deleted");
        Ok(())
    }

    async fn find_owned(
        &self,
        id: &MessageId,
        requestor: &ParticipantName,
    ) -> Result<Message, ChatError> {
        let message = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if !message.is_owned_by(requestor) {
            tracing::warn!(
                id = %id,
                requestor = %requestor,
                "Rejected change to a message not owned by requestor"
            );
            return Err(ChatError::Unauthorized(format!(
                "'{requestor}' cannot modify message {id}"
            )));
        }

        Ok(message)
    }

    fn display_time(&self) -> String {
        roomly_shared::time::format_clock_time(self.clock.now().value())
    }
}

fn not_found(id: &MessageId) -> ChatError {
    ChatError::NotFound(format!("message {id}"))
}
