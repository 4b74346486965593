//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::RepositoryError;

/// 入室処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// 同名のアクティブな参加者が既に存在する
    #[error("name '{0}' is already in use")]
    NameConflict(String),

    /// ストアの読み書きに失敗した
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// ハートビート処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeartbeatError {
    /// 対象の参加者が存在しない
    #[error("user '{0}' not found")]
    UserNotFound(String),

    /// ストアの読み書きに失敗した
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// メッセージ投稿処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostMessageError {
    /// 送信者がアクティブな参加者ではない
    #[error("sender '{0}' is not on the participant list")]
    SenderNotRegistered(String),

    /// ストアの読み書きに失敗した
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
