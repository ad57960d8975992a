use async_trait::async_trait;

use crate::account::Credential;
use crate::game::{Game, Role};
use crate::shared::DomainError;

/// Per-game check-in strategy
#[async_trait]
pub trait CheckinHandler: Send + Sync {
    /// Game this handler checks in for
    fn game(&self) -> Game;

    /// Check in one role and return its formatted report line
    async fn handle(&self, credential: &Credential, role: &Role) -> Result<String, DomainError>;
}
