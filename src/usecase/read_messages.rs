//! UseCase: メッセージ閲覧処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ReadMessagesUseCase::execute() メソッド
//! - 閲覧者ごとの可視性フィルタと末尾 limit
//!
//! ### なぜこのテストが必要か
//! - private_message が送信者と宛先以外に漏れないことを保証
//! - 可視列が到着順を保った部分列であることを確認
//! - 閲覧は純粋な読み取りで、ログを変更しないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：公開・プライベート・status が混在するログの閲覧
//! - エッジケース：limit が可視件数より大きい場合

use std::sync::Arc;

use crate::domain::{BoardRepository, Message, ParticipantName, RepositoryError, filter_visible};

/// メッセージ閲覧のユースケース
pub struct ReadMessagesUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn BoardRepository>,
}

impl ReadMessagesUseCase {
    /// 新しい ReadMessagesUseCase を作成
    pub fn new(repository: Arc<dyn BoardRepository>) -> Self {
        Self { repository }
    }

    /// 閲覧者に可視なメッセージ列を取得
    ///
    /// # Arguments
    ///
    /// * `viewer` - サニタイズ済みの閲覧者名（在室している必要はない）
    /// * `limit` - 指定時は可視列の末尾 N 件のみ返す
    pub async fn execute(
        &self,
        viewer: &ParticipantName,
        limit: Option<usize>,
    ) -> Result<Vec<Message>, RepositoryError> {
        let messages = self.repository.messages().await?;
        Ok(filter_visible(messages, viewer, limit))
    }
}
