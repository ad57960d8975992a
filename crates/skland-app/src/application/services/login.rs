use log::debug;
use std::sync::Arc;

use skland_domain::account::{Credential, LoginToken};
use skland_domain::check_in::SklandApi;
use skland_domain::DomainError;

/// Login token → grant code → credential
pub struct LoginService {
    api: Arc<dyn SklandApi>,
}

impl LoginService {
    pub fn new(api: Arc<dyn SklandApi>) -> Self {
        Self { api }
    }

    pub async fn login(&self, token: &LoginToken) -> Result<Credential, DomainError> {
        let submitted = token.unwrap_envelope();
        let grant_code = self.api.grant_code(&submitted).await?;
        debug!("Obtained grant code");
        self.api.credential(&grant_code).await
    }
}
