//! JSON ファイル Board Repository 実装
//!
//! 参加者レジストリとメッセージログを、それぞれ 1 つの JSON ドキュメント
//! （`participants.json` / `messages.json`）として保持します。各操作は
//! ファイル単位の Mutex を取得した上で全件読み込み・計算・全件書き込みを
//! 行うため、同一ストアへのサイクルは直列化されます。
//!
//! 読み書きの失敗（ファイル破損を含む）は StorageUnavailable として
//! 呼び出し元へ返し、ストアへの部分書き込みは行いません。

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::{fs, sync::Mutex};

use crate::domain::{
    BoardRepository, Message, Participant, ParticipantName, RepositoryError, Timestamp,
    partition_stale,
};

const PARTICIPANTS_FILE: &str = "participants.json";
const MESSAGES_FILE: &str = "messages.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct ParticipantsDocument {
    participants: Vec<Participant>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct MessagesDocument {
    messages: Vec<Message>,
}

fn storage_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::StorageUnavailable(err.to_string())
}

/// JSON ファイル Board Repository 実装
pub struct JsonFileBoardRepository {
    participants_path: PathBuf,
    messages_path: PathBuf,
    /// participants.json の read-modify-write を直列化するロック
    participants_lock: Mutex<()>,
    /// messages.json の read-modify-write を直列化するロック
    messages_lock: Mutex<()>,
}

impl JsonFileBoardRepository {
    /// データディレクトリを開き、無ければ空のコレクションで初期化する
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let dir = data_dir.as_ref();
        fs::create_dir_all(dir).await.map_err(storage_error)?;

        let repository = Self {
            participants_path: dir.join(PARTICIPANTS_FILE),
            messages_path: dir.join(MESSAGES_FILE),
            participants_lock: Mutex::new(()),
            messages_lock: Mutex::new(()),
        };

        if !fs::try_exists(&repository.participants_path)
            .await
            .map_err(storage_error)?
        {
            repository
                .write_participants(Vec::new())
                .await?;
        }
        if !fs::try_exists(&repository.messages_path)
            .await
            .map_err(storage_error)?
        {
            repository.write_messages(Vec::new()).await?;
        }

        Ok(repository)
    }

    async fn read_participants(&self) -> Result<Vec<Participant>, RepositoryError> {
        let bytes = fs::read(&self.participants_path)
            .await
            .map_err(storage_error)?;
        let document: ParticipantsDocument =
            serde_json::from_slice(&bytes).map_err(storage_error)?;
        Ok(document.participants)
    }

    async fn write_participants(
        &self,
        participants: Vec<Participant>,
    ) -> Result<(), RepositoryError> {
        let bytes =
            serde_json::to_vec(&ParticipantsDocument { participants }).map_err(storage_error)?;
        fs::write(&self.participants_path, bytes)
            .await
            .map_err(storage_error)
    }

    async fn read_messages(&self) -> Result<Vec<Message>, RepositoryError> {
        let bytes = fs::read(&self.messages_path).await.map_err(storage_error)?;
        let document: MessagesDocument = serde_json::from_slice(&bytes).map_err(storage_error)?;
        Ok(document.messages)
    }

    async fn write_messages(&self, messages: Vec<Message>) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec(&MessagesDocument { messages }).map_err(storage_error)?;
        fs::write(&self.messages_path, bytes)
            .await
            .map_err(storage_error)
    }
}

#[async_trait]
impl BoardRepository for JsonFileBoardRepository {
    async fn participants(&self) -> Result<Vec<Participant>, RepositoryError> {
        let _guard = self.participants_lock.lock().await;
        self.read_participants().await
    }

    async fn add_participant(&self, participant: Participant) -> Result<(), RepositoryError> {
        let _guard = self.participants_lock.lock().await;
        let mut participants = self.read_participants().await?;
        if participants.iter().any(|p| p.name == participant.name) {
            return Err(RepositoryError::NameTaken(participant.name.into_string()));
        }
        participants.push(participant);
        self.write_participants(participants).await
    }

    async fn refresh_participant(
        &self,
        name: &ParticipantName,
        at: Timestamp,
    ) -> Result<(), RepositoryError> {
        let _guard = self.participants_lock.lock().await;
        let mut participants = self.read_participants().await?;
        let Some(participant) = participants.iter_mut().find(|p| &p.name == name) else {
            return Err(RepositoryError::ParticipantNotFound(
                name.as_str().to_string(),
            ));
        };
        participant.last_status = at;
        self.write_participants(participants).await
    }

    async fn is_present(&self, name: &ParticipantName) -> Result<bool, RepositoryError> {
        let _guard = self.participants_lock.lock().await;
        let participants = self.read_participants().await?;
        Ok(participants.iter().any(|p| &p.name == name))
    }

    async fn messages(&self) -> Result<Vec<Message>, RepositoryError> {
        let _guard = self.messages_lock.lock().await;
        self.read_messages().await
    }

    async fn append_message(&self, message: Message) -> Result<(), RepositoryError> {
        let _guard = self.messages_lock.lock().await;
        let mut messages = self.read_messages().await?;
        messages.push(message);
        self.write_messages(messages).await
    }

    async fn evict_stale(
        &self,
        now: Timestamp,
        threshold_ms: i64,
    ) -> Result<Vec<Participant>, RepositoryError> {
        let _guard = self.participants_lock.lock().await;
        // A failed read leaves the registry file untouched.
        let snapshot = self.read_participants().await?;
        let (active, stale) = partition_stale(snapshot, now, threshold_ms);
        self.write_participants(active).await?;
        Ok(stale)
    }
}
