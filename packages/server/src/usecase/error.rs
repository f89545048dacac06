//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::RepositoryError;

/// Presence Registry / Message Log の操作が失敗した理由
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// 同名の参加者が既に登録されている
    #[error("participant '{0}' is already in the room")]
    Conflict(String),

    /// 参加者またはメッセージが存在しない
    #[error("{0} not found")]
    NotFound(String),

    /// 所有者でない、またはアクティブでない参加者による操作
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// ストアの I/O 失敗（リトライは呼び出し側が判断する）
    #[error(transparent)]
    StoreUnavailable(#[from] RepositoryError),
}
