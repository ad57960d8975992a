mod timeouts;

pub use timeouts::TimeoutConfig;

use std::path::PathBuf;

use skland_domain::account::LoginToken;

pub const TOKEN_ENV: &str = "SKYLAND_TOKEN";
pub const NOTIFY_ENV: &str = "SKYLAND_NOTIFY";
pub const FEISHU_KEY_ENV: &str = "SKYLAND_FEISHU_KEY";
pub const DINGTALK_TOKEN_ENV: &str = "SKYLAND_DINGTALK_TOKEN";
pub const DINGTALK_SECRET_ENV: &str = "SKYLAND_DINGTALK_SECRET";
pub const LOG_DIR_ENV: &str = "SKYLAND_LOG_DIR";

const TOKEN_SEPARATOR: char = ';';

/// Notification channels and the master switch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifyConfig {
    pub enabled: bool,
    pub feishu_webhook_key: Option<String>,
    pub dingtalk_access_token: Option<String>,
    pub dingtalk_secret: Option<String>,
}

impl NotifyConfig {
    pub fn has_channel(&self) -> bool {
        self.feishu_webhook_key.is_some() || self.dingtalk_access_token.is_some()
    }
}

/// Process configuration, built once at startup and passed down explicitly
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub tokens: Vec<LoginToken>,
    pub notify: NotifyConfig,
    pub timeouts: TimeoutConfig,
    pub log_dir: Option<PathBuf>,
    /// `.env` file that was loaded, if any
    pub env_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load from the process environment, after reading `.env` if present
    ///
    /// Runs before logging is set up, so the caller reports `env_file`.
    pub fn from_env() -> Self {
        let env_file = dotenvy::dotenv().ok();
        Self {
            env_file,
            ..Self::from_lookup(|key| std::env::var(key).ok())
        }
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let tokens = lookup(TOKEN_ENV)
            .map(|raw| parse_tokens(&raw))
            .unwrap_or_default();
        let enabled = lookup(NOTIFY_ENV)
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            tokens,
            notify: NotifyConfig {
                enabled,
                feishu_webhook_key: non_empty(FEISHU_KEY_ENV),
                dingtalk_access_token: non_empty(DINGTALK_TOKEN_ENV),
                dingtalk_secret: non_empty(DINGTALK_SECRET_ENV),
            },
            timeouts: TimeoutConfig::default(),
            log_dir: non_empty(LOG_DIR_ENV).map(PathBuf::from),
            env_file: None,
        }
    }
}

/// Split a `;`-separated token list, trimming entries and dropping empty ones
pub fn parse_tokens(raw: &str) -> Vec<LoginToken> {
    raw.split(TOKEN_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(LoginToken::from)
        .collect()
}
