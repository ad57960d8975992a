use log::info;
use serde_json::json;

use skland_domain::account::{Credential, GrantCode};
use skland_domain::DomainError;

use super::types::{
    api_url, ApiResponse, CredData, GrantResponse, CRED_CODE_PATH, GRANT_CODE_URL,
    SKLAND_APP_CODE,
};
use super::{network_error, RetryOn};

impl super::HttpClient {
    /// Exchange a login token for a grant code at the Hypergryph OAuth endpoint
    pub async fn fetch_grant_code(&self, token: &str) -> Result<GrantCode, DomainError> {
        let body = json!({ "appCode": SKLAND_APP_CODE, "token": token, "type": 0 });

        let resp: GrantResponse = self
            .send_json("grant code", RetryOn::ConnectOnly, || {
                Ok(self.client.post(GRANT_CODE_URL).json(&body))
            })
            .await
            .map_err(network_error)?;

        grant_code_from(resp)
    }

    /// Exchange a grant code for `cred` and the signing secret
    pub async fn fetch_credential(
        &self,
        grant_code: &GrantCode,
    ) -> Result<Credential, DomainError> {
        let body = json!({ "code": grant_code.as_str(), "kind": 1 });
        let url = api_url(CRED_CODE_PATH);

        let resp: ApiResponse<CredData> = self
            .send_json("cred", RetryOn::ConnectOnly, || {
                Ok(self.client.post(&url).json(&body))
            })
            .await
            .map_err(network_error)?;

        let credential = credential_from(resp)?;
        info!("Obtained Skland credential");
        Ok(credential)
    }
}

pub(super) fn grant_code_from(resp: GrantResponse) -> Result<GrantCode, DomainError> {
    if resp.status != 0 {
        return Err(DomainError::Auth(format!(
            "获取 grant code 失败：{}",
            resp.msg.unwrap_or_default()
        )));
    }

    resp.data
        .map(|data| GrantCode::new(data.code))
        .ok_or_else(|| DomainError::Auth("获取 grant code 失败：响应缺少 code".to_string()))
}

pub(super) fn credential_from(resp: ApiResponse<CredData>) -> Result<Credential, DomainError> {
    if resp.code != 0 {
        return Err(DomainError::Auth(format!(
            "获取 cred 失败：{}",
            resp.message.unwrap_or_default()
        )));
    }

    resp.data
        .map(|data| Credential::new(data.cred, data.token))
        .ok_or_else(|| DomainError::Auth("获取 cred 失败：响应缺少 cred".to_string()))
}
