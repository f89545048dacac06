//! UseCase: 期限切れ参加者の定期削除（Sweeper）
//!
//! 一定間隔で PresenceRegistry に期限切れ参加者の削除を依頼し、
//! 削除された参加者ごとに退室のシステムメッセージを MessageLog に追加します。
//! メッセージ自体を削除・フィルタすることはありません。

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

use crate::domain::{Clock, ParticipantName};

use super::{
    error::ChatError,
    message_log::{MessageLog, SystemNotice},
    presence_registry::PresenceRegistry,
    settings::RoomSettings,
};

pub struct Sweeper {
    presence: Arc<PresenceRegistry>,
    log: Arc<MessageLog>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    interval: Duration,
}

impl Sweeper {
    /// 新しい Sweeper を作成
    pub fn new(
        presence: Arc<PresenceRegistry>,
        log: Arc<MessageLog>,
        clock: Arc<dyn Clock>,
        settings: &RoomSettings,
    ) -> Self {
        Self {
            presence,
            log,
            clock,
            ttl: settings.participant_ttl,
            interval: settings.sweep_interval,
        }
    }

    /// 1 回分の sweep を実行し、削除された参加者名を返す
    ///
    /// 退室メッセージの追加に失敗しても、残りの参加者の処理は続ける。
    ///
    /// # Errors
    ///
    /// * `ChatError::StoreUnavailable` - 参加者一覧を取得できなかった
    pub async fn sweep_once(&self) -> Result<Vec<ParticipantName>, ChatError> {
        let removed = self
            .presence
            .sweep_expired(self.ttl, self.clock.now())
            .await?;

        let mut names = Vec::with_capacity(removed.len());
        for participant in removed {
            tracing::info!(participant = %participant.name, "Participant expired");
            if let Err(e) = self
                .log
                .append_system(&participant.name, SystemNotice::Departure)
                .await
            {
                tracing::error!(
                    participant = %participant.name,
                    error = %e,
                    "Failed to append departure message"
                );
            }
            names.push(participant.name);
        }

        Ok(names)
    }

    /// バックグラウンドタスクとして定期実行を開始する
    pub fn start(self: Arc<Self>) -> SweeperHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let period = self.interval.max(Duration::from_millis(1));

        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            tracing::info!(
                interval_ms = period.as_millis() as u64,
                ttl_ms = self.ttl.as_millis() as u64,
                "Sweeper started"
            );

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(e) = self.sweep_once().await {
                            tracing::error!(error = %e, "Sweep failed");
                        }
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }

            tracing::info!("Sweeper stopped");
        });

        SweeperHandle { shutdown_tx, task }
    }
}

/// 実行中の Sweeper を停止するためのハンドル
pub struct SweeperHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// 停止を通知し、タスクの終了を待つ
    pub async fn stop(self) {
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "Sweeper task ended abnormally");
        }
    }
}
