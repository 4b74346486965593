//! UseCase: メッセージ投稿処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PostMessageUseCase::execute() メソッド
//! - 送信者の在室チェックとログへの追記
//!
//! ### なぜこのテストが必要か
//! - 在室していない送信者の投稿を拒否することを保証
//! - 宛先には認可チェックを行わない（可視性は閲覧側で判定する）ことを確認
//! - ストア障害が SenderNotRegistered と区別されて伝播することを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：在室中の参加者による投稿（宛先の在室は問わない）
//! - 異常系：未登録の送信者、ストア障害

use std::sync::Arc;

use crate::{
    domain::{
        BoardRepository, Message, MessageBody, MessageKind, ParticipantName, Recipient, Timestamp,
    },
    time::now_timestamp,
};

use super::error::PostMessageError;

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn BoardRepository>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(repository: Arc<dyn BoardRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ投稿を実行
    ///
    /// `from` は信頼できる呼び出し元識別ヘッダ由来で、リクエストボディとは
    /// 独立にサニタイズ済み。宛先の存在チェックは行わない。
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 追記成功
    /// * `Err(PostMessageError)` - 送信者未登録、またはストア障害
    pub async fn execute(
        &self,
        from: ParticipantName,
        to: Recipient,
        text: MessageBody,
        kind: MessageKind,
    ) -> Result<(), PostMessageError> {
        if !self.repository.is_present(&from).await? {
            return Err(PostMessageError::SenderNotRegistered(from.into_string()));
        }

        let now = Timestamp::new(now_timestamp());
        self.repository
            .append_message(Message::user(from, to, text, kind, now))
            .await?;

        Ok(())
    }
}
