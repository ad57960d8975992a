use async_trait::async_trait;
use serde::Serialize;

use super::AttendanceResponse;
use crate::account::{Credential, GrantCode};
use crate::game::{BindingGroup, Game};
use crate::shared::DomainError;

/// `gameId` the Endfield attendance endpoint expects
pub const ENDFIELD_GAME_ID: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArknightsAttendance {
    pub uid: Option<String>,
    pub game_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndfieldAttendance {
    pub uid: Option<String>,
    pub game_id: u32,
    pub role_id: String,
    pub server_id: String,
}

/// JSON body of an attendance request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttendanceRequest {
    Arknights(ArknightsAttendance),
    Endfield(EndfieldAttendance),
}

/// Port to the Skland / Hypergryph HTTP API
///
/// Implementations sign every request that carries a credential. Non-zero
/// status codes of the handshake and binding calls surface as
/// `DomainError::Auth` / `DomainError::Role`; the attendance response is
/// returned as-is so callers can interpret it.
#[async_trait]
pub trait SklandApi: Send + Sync {
    /// Exchange a login token for a grant code
    async fn grant_code(&self, token: &str) -> Result<GrantCode, DomainError>;

    /// Exchange a grant code for a session credential
    async fn credential(&self, grant_code: &GrantCode) -> Result<Credential, DomainError>;

    /// Fetch every game binding group of the account
    async fn bindings(&self, credential: &Credential) -> Result<Vec<BindingGroup>, DomainError>;

    /// Claim the daily attendance reward for one role
    async fn attendance(
        &self,
        credential: &Credential,
        game: Game,
        request: &AttendanceRequest,
    ) -> Result<AttendanceResponse, DomainError>;
}
