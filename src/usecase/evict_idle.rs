//! UseCase: 自動退室処理（Eviction Scheduler の 1 tick）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - EvictIdleUseCase::execute() メソッド（1 tick 分の sweep）
//! - stale 参加者の除去と退室通知の追記
//!
//! ### なぜこのテストが必要か
//! - しきい値以上アイドルな参加者が tick 直後にレジストリから消えることを保証
//! - 退室通知がスナップショットの順序どおりに 1 件ずつ追記されることを確認
//! - ストア読み取り障害時に tick をスキップしてもプロセスが落ちないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：stale 参加者の一括退室
//! - エッジケース：ハートビート直後の参加者は退室しない
//! - 異常系：破損したストアスナップショット
//!
//! 壁時計への依存を切るため、`execute` は `now` を引数に取ります。
//! テストは単一 tick を決定的に起動でき、定期実行は
//! [`sweep_idle_participants`] が担当します。

use std::{sync::Arc, time::Duration};

use tokio::time::MissedTickBehavior;

use crate::domain::{BoardRepository, Message, ParticipantName, RepositoryError, Timestamp};

/// Sweep 間隔のデフォルト値（ミリ秒）
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 15_000;

/// 自動退室のしきい値のデフォルト値（ミリ秒）
pub const DEFAULT_STALENESS_MS: i64 = 10_000;

/// 自動退室のユースケース
pub struct EvictIdleUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn BoardRepository>,
    /// 最終活動からこのミリ秒数以上で退室対象になる
    staleness_ms: i64,
}

impl EvictIdleUseCase {
    /// 新しい EvictIdleUseCase を作成
    pub fn new(repository: Arc<dyn BoardRepository>, staleness_ms: i64) -> Self {
        Self {
            repository,
            staleness_ms,
        }
    }

    /// 1 tick 分の sweep を実行
    ///
    /// stale な参加者をレジストリから取り除き、それぞれについて退室の
    /// status 通知をスナップショット順にログへ追記する。
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ParticipantName>)` - 退室した参加者名（スナップショット順）
    /// * `Err(RepositoryError)` - ストア障害。呼び出し元は tick をスキップする
    pub async fn execute(&self, now: Timestamp) -> Result<Vec<ParticipantName>, RepositoryError> {
        let evicted = self.repository.evict_stale(now, self.staleness_ms).await?;

        let mut names = Vec::with_capacity(evicted.len());
        for participant in evicted {
            self.repository
                .append_message(Message::departed(&participant.name, now))
                .await?;
            names.push(participant.name);
        }

        Ok(names)
    }
}

/// 自動退室の定期実行ループ
///
/// tick の実行を await してから次の tick を待つため、遅い tick が次の
/// tick と並行に走ることはない。ストア障害の tick は警告ログを残して
/// スキップし、前回の状態を保持する。
pub async fn sweep_idle_participants(usecase: EvictIdleUseCase, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let now = Timestamp::new(crate::time::now_timestamp());
        match usecase.execute(now).await {
            Ok(evicted) if evicted.is_empty() => {}
            Ok(evicted) => {
                let names: Vec<&str> = evicted.iter().map(ParticipantName::as_str).collect();
                tracing::info!("Evicted {} idle participant(s): {:?}", names.len(), names);
            }
            Err(e) => {
                tracing::warn!("Eviction sweep skipped: {}", e);
            }
        }
    }
}
