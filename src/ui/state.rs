//! Shared server state.

use std::sync::Arc;

use crate::domain::BoardRepository;

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn BoardRepository>,
}
