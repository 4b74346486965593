//! UseCase: 入室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - 入室処理（重複チェック、status 通知の追記）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：同名の参加者は常に最大 1 人
//! - 入室成功時に "entra na sala..." の status 通知がログに追記されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の入室
//! - 異常系：使用中の名前での入室試行

use std::sync::Arc;

use crate::{
    domain::{BoardRepository, Message, Participant, ParticipantName, RepositoryError, Timestamp},
    time::now_timestamp,
};

use super::error::JoinError;

/// 入室のユースケース
pub struct JoinRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn BoardRepository>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(repository: Arc<dyn BoardRepository>) -> Self {
        Self { repository }
    }

    /// 入室を実行
    ///
    /// # Arguments
    ///
    /// * `name` - サニタイズ済みの参加者名（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 入室成功
    /// * `Err(JoinError)` - 入室失敗
    pub async fn execute(&self, name: ParticipantName) -> Result<(), JoinError> {
        let now = Timestamp::new(now_timestamp());

        // 1. 重複チェックと登録（Repository のクリティカルセクション内で原子的に行う）
        match self
            .repository
            .add_participant(Participant::new(name.clone(), now))
            .await
        {
            Ok(()) => {}
            Err(RepositoryError::NameTaken(taken)) => return Err(JoinError::NameConflict(taken)),
            Err(other) => return Err(JoinError::Repository(other)),
        }

        // 2. 入室の status 通知をログに追記
        self.repository
            .append_message(Message::joined(&name, now))
            .await?;

        Ok(())
    }
}
