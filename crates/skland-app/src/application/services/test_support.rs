use async_trait::async_trait;
use mockall::mock;

use skland_domain::account::{Credential, GrantCode};
use skland_domain::check_in::{AttendanceRequest, AttendanceResponse, SklandApi};
use skland_domain::game::{BindingGroup, Game};
use skland_domain::DomainError;

mock! {
    pub Api {}

    #[async_trait]
    impl SklandApi for Api {
        async fn grant_code(&self, token: &str) -> Result<GrantCode, DomainError>;
        async fn credential(&self, grant_code: &GrantCode) -> Result<Credential, DomainError>;
        async fn bindings(&self, credential: &Credential) -> Result<Vec<BindingGroup>, DomainError>;
        async fn attendance(
            &self,
            credential: &Credential,
            game: Game,
            request: &AttendanceRequest,
        ) -> Result<AttendanceResponse, DomainError>;
    }
}
