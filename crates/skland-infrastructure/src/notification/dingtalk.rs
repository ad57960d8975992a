use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use sha2::Sha256;

use skland_domain::notification::{NotificationMessage, NotificationSender};
use skland_domain::DomainError;

use super::{TEST_CONTENT, TEST_TITLE};

type HmacSha256 = Hmac<Sha256>;

const DINGTALK_ROBOT_URL: &str = "https://oapi.dingtalk.com/robot/send";

/// DingTalk custom robot, optionally with "sign" security enabled
pub struct DingTalkWebhookSender {
    access_token: String,
    secret: Option<String>,
    client: Client,
}

/// `{"errcode":0,"errmsg":"ok"}` on success
#[derive(Debug, Deserialize)]
struct DingTalkReply {
    #[serde(default)]
    errcode: Option<i64>,
    #[serde(default)]
    errmsg: Option<String>,
}

impl DingTalkWebhookSender {
    pub fn new(access_token: String, secret: Option<String>) -> Self {
        Self {
            access_token,
            secret,
            client: Client::new(),
        }
    }

    fn webhook_url(&self, timestamp_ms: i64) -> Result<String, DomainError> {
        let mut url = format!("{}?access_token={}", DINGTALK_ROBOT_URL, self.access_token);
        if let Some(secret) = &self.secret {
            let sign = sign_timestamp(secret, timestamp_ms)?;
            url.push_str(&format!("&timestamp={}&sign={}", timestamp_ms, sign));
        }
        Ok(url)
    }
}

fn text_payload(message: &NotificationMessage) -> serde_json::Value {
    json!({
        "msgtype": "text",
        "text": { "content": format!("{}\n\n{}", message.title, message.content) }
    })
}

/// URL-encoded `base64(hmac_sha256(secret, "{timestamp}\n{secret}"))`
fn sign_timestamp(secret: &str, timestamp_ms: i64) -> Result<String, DomainError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| DomainError::InvalidInput(format!("钉钉加签密钥无效：{}", e)))?;
    mac.update(format!("{}\n{}", timestamp_ms, secret).as_bytes());
    let encoded = STANDARD.encode(mac.finalize().into_bytes());
    Ok(url::form_urlencoded::byte_serialize(encoded.as_bytes()).collect())
}

#[async_trait]
impl NotificationSender for DingTalkWebhookSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let url = self.webhook_url(chrono::Utc::now().timestamp_millis())?;

        let response = self
            .client
            .post(&url)
            .json(&text_payload(message))
            .send()
            .await
            .map_err(|e| DomainError::Notification(format!("钉钉推送请求失败：{}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Notification(format!(
                "钉钉推送失败（HTTP {}）：{}",
                status, body
            )));
        }

        let reply: DingTalkReply = response
            .json()
            .await
            .map_err(|e| DomainError::Notification(format!("钉钉响应无法解析：{}", e)))?;

        match reply.errcode {
            None | Some(0) => Ok(()),
            Some(code) => Err(DomainError::Notification(format!(
                "钉钉返回错误 {}：{}",
                code,
                reply.errmsg.unwrap_or_default()
            ))),
        }
    }

    async fn test(&self) -> Result<(), DomainError> {
        self.send(&NotificationMessage::new(TEST_TITLE, TEST_CONTENT))
            .await
    }
}
