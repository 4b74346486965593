//! InMemory Board Repository 実装
//!
//! ドメイン層が定義する BoardRepository trait の具体的な実装。
//! 参加者レジストリとメッセージログをそれぞれ Mutex 配下の Vec として
//! 保持します。各メソッドはロックを取得してから読み書きするため、
//! 同一ストアへの read-modify-write サイクルは直列化されます。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    BoardRepository, Message, Participant, ParticipantName, RepositoryError, Timestamp,
    partition_stale,
};

/// インメモリ Board Repository 実装
///
/// テストと、永続化を指定しない起動モードで使用します。
#[derive(Default)]
pub struct InMemoryBoardRepository {
    /// 現在の参加者（挿入順）
    participants: Mutex<Vec<Participant>>,
    /// 追記専用のメッセージログ（到着順）
    messages: Mutex<Vec<Message>>,
}

impl InMemoryBoardRepository {
    /// 空のレジストリとログで新しい Repository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn participants(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.clone())
    }

    async fn add_participant(&self, participant: Participant) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        if participants.iter().any(|p| p.name == participant.name) {
            return Err(RepositoryError::NameTaken(participant.name.into_string()));
        }
        participants.push(participant);
        Ok(())
    }

    async fn refresh_participant(
        &self,
        name: &ParticipantName,
        at: Timestamp,
    ) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        match participants.iter_mut().find(|p| &p.name == name) {
            Some(participant) => {
                participant.last_status = at;
                Ok(())
            }
            None => Err(RepositoryError::ParticipantNotFound(
                name.as_str().to_string(),
            )),
        }
    }

    async fn is_present(&self, name: &ParticipantName) -> Result<bool, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.iter().any(|p| &p.name == name))
    }

    async fn messages(&self) -> Result<Vec<Message>, RepositoryError> {
        let messages = self.messages.lock().await;
        Ok(messages.clone())
    }

    async fn append_message(&self, message: Message) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        messages.push(message);
        Ok(())
    }

    async fn evict_stale(
        &self,
        now: Timestamp,
        threshold_ms: i64,
    ) -> Result<Vec<Participant>, RepositoryError> {
        let mut participants = self.participants.lock().await;
        let snapshot = std::mem::take(&mut *participants);
        let (active, stale) = partition_stale(snapshot, now, threshold_ms);
        *participants = active;
        Ok(stale)
    }
}
