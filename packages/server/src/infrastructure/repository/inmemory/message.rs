//! InMemory Message Repository 実装
//!
//! Vec を追記専用ログとして使用します。挿入順がそのままログの順序です。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Message, MessageId, MessageIdFactory, MessageRepository, MessageText, NewMessage,
    RepositoryError,
};

/// インメモリ Message Repository 実装
#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: Mutex<Vec<Message>>,
}

impl InMemoryMessageRepository {
    /// 新しい InMemoryMessageRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn find_by_id(&self, id: &MessageId) -> Result<Option<Message>, RepositoryError> {
        let messages = self.messages.lock().await;
        Ok(messages.iter().find(|m| &m.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Message>, RepositoryError> {
        let messages = self.messages.lock().await;
        Ok(messages.clone())
    }

    async fn insert(&self, message: NewMessage) -> Result<Message, RepositoryError> {
        let message = message.with_id(MessageIdFactory::generate());
        let mut messages = self.messages.lock().await;
        messages.push(message.clone());
        Ok(message)
    }

    async fn update_text(
        &self,
        id: &MessageId,
        text: MessageText,
    ) -> Result<bool, RepositoryError> {
        let mut messages = self.messages.lock().await;
        match messages.iter_mut().find(|m| &m.id == id) {
            Some(message) => {
                message.text = text;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &MessageId) -> Result<bool, RepositoryError> {
        let mut messages = self.messages.lock().await;
        match messages.iter().position(|m| &m.id == id) {
            // Vec::remove keeps the remaining order
            Some(index) => {
                messages.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
