use async_trait::async_trait;

use skland_domain::notification::{NotificationMessage, NotificationSender};
use skland_domain::DomainError;

use super::{text_payload, FeishuReply, FeishuWebhookSender};
use crate::notification::{TEST_CONTENT, TEST_TITLE};

#[async_trait]
impl NotificationSender for FeishuWebhookSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let response = self
            .client
            .post(self.webhook_url())
            .json(&text_payload(message))
            .send()
            .await
            .map_err(|e| DomainError::Notification(format!("飞书推送请求失败：{}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Notification(format!(
                "飞书推送失败（HTTP {}）：{}",
                status, body
            )));
        }

        let reply: FeishuReply = response
            .json()
            .await
            .map_err(|e| DomainError::Notification(format!("飞书响应无法解析：{}", e)))?;

        reply.into_result().map_err(DomainError::Notification)
    }

    async fn test(&self) -> Result<(), DomainError> {
        self.send(&NotificationMessage::new(TEST_TITLE, TEST_CONTENT))
            .await
    }
}
