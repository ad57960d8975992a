use reqwest::StatusCode;
use serde::Deserialize;

use skland_domain::game::BindingGroup;

pub const USER_AGENT: &str =
    "Skland/1.0.1 (com.hypergryph.skland; build:100001014; Android 31; ) Okhttp/4.11.0";

pub const SKLAND_API_BASE: &str = "https://zonai.skland.com";
pub const GRANT_CODE_URL: &str = "https://as.hypergryph.com/user/oauth2/v2/grant";
pub const CRED_CODE_PATH: &str = "/api/v1/user/auth/generate_cred_by_code";
pub const BINDING_PATH: &str = "/api/v1/game/player/binding";

/// `appCode` of the Skland app at the Hypergryph OAuth endpoint
pub const SKLAND_APP_CODE: &str = "4ca99fa6b56cc2ba";

/// Server errors the transport retries
pub const RETRY_STATUS_CODES: [u16; 4] = [500, 502, 503, 504];

/// HTTP retry configuration
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (default: 3)
    pub max_retries: u32,
    /// Initial backoff duration in milliseconds (default: 1000ms)
    pub initial_backoff_ms: u64,
    /// Maximum backoff duration in milliseconds (default: 10000ms)
    pub max_backoff_ms: u64,
    /// Backoff multiplier (default: 2.0 for exponential backoff)
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 1000,
            max_backoff_ms: 10000,
            backoff_multiplier: 2.0,
        }
    }
}

/// Response status listed in [`RETRY_STATUS_CODES`]
#[derive(Debug, thiserror::Error)]
#[error("server returned HTTP {0}")]
pub(super) struct RetryableStatus(pub StatusCode);

/// `POST /user/oauth2/v2/grant`
#[derive(Debug, Deserialize)]
pub(super) struct GrantResponse {
    pub status: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<GrantData>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GrantData {
    pub code: String,
}

/// Envelope shared by the zonai endpoints
#[derive(Debug, Deserialize)]
pub(super) struct ApiResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CredData {
    pub cred: String,
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct BindingData {
    #[serde(default)]
    pub list: Vec<BindingGroup>,
}

/// Path and raw query of `url`, the parts covered by the signature
pub(super) fn path_and_query(url: &str) -> anyhow::Result<(String, String)> {
    let parsed = url::Url::parse(url)?;
    Ok((
        parsed.path().to_string(),
        parsed.query().unwrap_or("").to_string(),
    ))
}

pub(super) fn api_url(path: &str) -> String {
    format!("{}{}", SKLAND_API_BASE, path)
}

/// First `max` characters of a response body for error messages
pub(super) fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_and_query() {
        assert_eq!(
            path_and_query("https://zonai.skland.com/api/v1/game/player/binding").unwrap(),
            ("/api/v1/game/player/binding".to_string(), String::new())
        );
        assert_eq!(
            path_and_query("https://example.com/a/b?x=1&y=2").unwrap(),
            ("/a/b".to_string(), "x=1&y=2".to_string())
        );
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("签到失败了", 2), "签到");
        assert_eq!(truncate("short", 100), "short");
    }

    #[test]
    fn test_envelopes_tolerate_missing_fields() {
        let grant: GrantResponse = serde_json::from_str(r#"{"status":1,"msg":"bad"}"#).unwrap();
        assert_eq!(grant.status, 1);
        assert!(grant.data.is_none());

        let cred: ApiResponse<CredData> = serde_json::from_str(r#"{"code":0}"#).unwrap();
        assert!(cred.data.is_none());

        let bindings: ApiResponse<BindingData> = serde_json::from_str(
            r#"{"code":0,"message":"OK","data":{"list":[{"appCode":"arknights","bindingList":[]}]}}"#,
        )
        .unwrap();
        assert_eq!(bindings.data.unwrap().list.len(), 1);
    }
}
