use async_trait::async_trait;

use skland_domain::account::{Credential, GrantCode};
use skland_domain::check_in::{AttendanceRequest, AttendanceResponse, SklandApi};
use skland_domain::game::{BindingGroup, Game};
use skland_domain::DomainError;

#[async_trait]
impl SklandApi for super::HttpClient {
    async fn grant_code(&self, token: &str) -> Result<GrantCode, DomainError> {
        self.fetch_grant_code(token).await
    }

    async fn credential(&self, grant_code: &GrantCode) -> Result<Credential, DomainError> {
        self.fetch_credential(grant_code).await
    }

    async fn bindings(&self, credential: &Credential) -> Result<Vec<BindingGroup>, DomainError> {
        self.fetch_bindings(credential).await
    }

    async fn attendance(
        &self,
        credential: &Credential,
        game: Game,
        request: &AttendanceRequest,
    ) -> Result<AttendanceResponse, DomainError> {
        self.send_attendance(credential, game, request).await
    }
}
