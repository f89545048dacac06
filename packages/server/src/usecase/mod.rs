//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod command;
pub mod connect_participant;
pub mod error;
pub mod message_log;
pub mod presence_registry;
pub mod settings;
pub mod sweeper;

pub use command::{EditMessageCommand, SendMessageCommand};
pub use connect_participant::ConnectParticipantUseCase;
pub use error::ChatError;
pub use message_log::{MessageLog, SystemNotice};
pub use presence_registry::PresenceRegistry;
pub use settings::RoomSettings;
pub use sweeper::{Sweeper, SweeperHandle};
