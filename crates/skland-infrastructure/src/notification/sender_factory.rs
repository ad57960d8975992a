use std::sync::Arc;

use skland_domain::notification::NotificationSender;

use super::{DingTalkWebhookSender, FeishuWebhookSender};
use crate::config::NotifyConfig;

/// Create a sender for every channel present in `config`
pub fn create_senders(config: &NotifyConfig) -> Vec<Arc<dyn NotificationSender>> {
    let mut senders: Vec<Arc<dyn NotificationSender>> = Vec::new();

    if let Some(key) = &config.feishu_webhook_key {
        senders.push(Arc::new(FeishuWebhookSender::new(key.clone())));
    }
    if let Some(token) = &config.dingtalk_access_token {
        senders.push(Arc::new(DingTalkWebhookSender::new(
            token.clone(),
            config.dingtalk_secret.clone(),
        )));
    }

    senders
}
