mod sender;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use skland_domain::notification::NotificationMessage;

const FEISHU_HOOK_BASE: &str = "https://open.feishu.cn/open-apis/bot/v2/hook";

/// Feishu custom bot, addressed by its webhook key
pub struct FeishuWebhookSender {
    webhook_key: String,
    client: Client,
}

/// Reply body of the bot webhook, `{"code":0,"msg":"success"}` on success
#[derive(Debug, Deserialize)]
struct FeishuReply {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    msg: Option<String>,
}

impl FeishuReply {
    fn into_result(self) -> Result<(), String> {
        match self.code {
            None | Some(0) => Ok(()),
            Some(code) => Err(format!(
                "飞书返回错误 {}：{}",
                code,
                self.msg.unwrap_or_default()
            )),
        }
    }
}

impl FeishuWebhookSender {
    pub fn new(webhook_key: String) -> Self {
        Self {
            webhook_key,
            client: Client::new(),
        }
    }

    fn webhook_url(&self) -> String {
        format!("{}/{}", FEISHU_HOOK_BASE, self.webhook_key)
    }
}

/// The report is line-oriented, so it goes out as a plain `text` message
fn text_payload(message: &NotificationMessage) -> serde_json::Value {
    json!({
        "msg_type": "text",
        "content": { "text": format!("{}\n\n{}", message.title, message.content) }
    })
}
