use anyhow::Context;

use skland_domain::account::Credential;
use skland_domain::game::BindingGroup;
use skland_domain::DomainError;

use super::types::{api_url, path_and_query, ApiResponse, BindingData, BINDING_PATH};
use super::{network_error, RetryOn};
use crate::http::signing::Signer;

impl super::HttpClient {
    /// Fetch every binding group of the account behind `credential`
    pub async fn fetch_bindings(
        &self,
        credential: &Credential,
    ) -> Result<Vec<BindingGroup>, DomainError> {
        let url = api_url(BINDING_PATH);
        let (path, query) = path_and_query(&url).map_err(network_error)?;
        let signer = Signer::new(credential.sign_token());

        let resp: ApiResponse<BindingData> = self
            .send_json("binding", RetryOn::Transient, || {
                let headers = signer
                    .sign_now(&path, &query)?
                    .to_headers(credential.cred())
                    .context("Failed to build signed headers")?;
                Ok(self.client.get(&url).headers(headers))
            })
            .await
            .map_err(network_error)?;

        bindings_from(resp)
    }
}

pub(super) fn bindings_from(
    resp: ApiResponse<BindingData>,
) -> Result<Vec<BindingGroup>, DomainError> {
    if resp.code != 0 {
        return Err(DomainError::Role(format!(
            "获取角色失败：{}",
            resp.message.unwrap_or_default()
        )));
    }

    Ok(resp.data.map(|data| data.list).unwrap_or_default())
}
