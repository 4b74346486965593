//! UseCase: ハートビート処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - HeartbeatUseCase::execute() メソッド
//! - 参加者の last_status 更新
//!
//! ### なぜこのテストが必要か
//! - ハートビートが自動退室のタイマーをリセットすることを保証
//! - 存在しない参加者のハートビートが拒否されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録済み参加者のハートビート
//! - 異常系：未登録の名前でのハートビート

use std::sync::Arc;

use crate::{
    domain::{BoardRepository, ParticipantName, RepositoryError, Timestamp},
    time::now_timestamp,
};

use super::error::HeartbeatError;

/// ハートビートのユースケース
pub struct HeartbeatUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn BoardRepository>,
}

impl HeartbeatUseCase {
    /// 新しい HeartbeatUseCase を作成
    pub fn new(repository: Arc<dyn BoardRepository>) -> Self {
        Self { repository }
    }

    /// ハートビートを実行
    ///
    /// last_status を現在時刻に更新するだけで、メッセージは追記しない。
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 更新成功
    /// * `Err(HeartbeatError)` - 対象が存在しない、またはストア障害
    pub async fn execute(&self, name: ParticipantName) -> Result<(), HeartbeatError> {
        let now = Timestamp::new(now_timestamp());
        match self.repository.refresh_participant(&name, now).await {
            Ok(()) => Ok(()),
            Err(RepositoryError::ParticipantNotFound(missing)) => {
                Err(HeartbeatError::UserNotFound(missing))
            }
            Err(other) => Err(HeartbeatError::Repository(other)),
        }
    }
}
