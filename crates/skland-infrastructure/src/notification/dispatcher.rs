use async_trait::async_trait;
use log::{debug, error, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use skland_domain::notification::{NotificationMessage, NotificationSender};
use skland_domain::DomainError;

static HORIZONTAL_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+").expect("valid whitespace pattern"));

/// Collapse runs of spaces and tabs into one space
pub fn collapse_whitespace(content: &str) -> String {
    HORIZONTAL_WHITESPACE.replace_all(content, " ").into_owned()
}

/// Fans one message out to every configured channel
pub struct NotificationDispatcher {
    enabled: bool,
    senders: Vec<Arc<dyn NotificationSender>>,
}

impl NotificationDispatcher {
    pub fn new(enabled: bool, senders: Vec<Arc<dyn NotificationSender>>) -> Self {
        if enabled && senders.is_empty() {
            warn!("Notification is enabled but no channel is configured");
        }
        Self { enabled, senders }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            senders: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[async_trait]
impl NotificationSender for NotificationDispatcher {
    /// Fails only when every channel failed
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        if !self.enabled {
            debug!("Notification disabled, skipping: {}", message.title);
            return Ok(());
        }
        if self.senders.is_empty() {
            return Ok(());
        }

        let message = message
            .clone()
            .with_content(collapse_whitespace(&message.content));

        let mut failures = Vec::new();
        for (index, sender) in self.senders.iter().enumerate() {
            match sender.send(&message).await {
                Ok(()) => info!("Sent notification via channel #{}", index + 1),
                Err(e) => {
                    error!("Failed to send notification via channel #{}: {}", index + 1, e);
                    failures.push(e.to_string());
                }
            }
        }

        if failures.len() == self.senders.len() {
            return Err(DomainError::Notification(failures.join("; ")));
        }
        Ok(())
    }

    /// Probes every channel, whether or not the notify flag is on.
    ///
    /// Fails when no channel is configured or when any channel fails.
    async fn test(&self) -> Result<(), DomainError> {
        if self.senders.is_empty() {
            return Err(DomainError::Config("未配置任何通知渠道".to_string()));
        }

        let mut failures = Vec::new();
        for (index, sender) in self.senders.iter().enumerate() {
            match sender.test().await {
                Ok(()) => info!("Channel #{} test notification delivered", index + 1),
                Err(e) => {
                    error!("Channel #{} test notification failed: {}", index + 1, e);
                    failures.push(format!("#{} {}", index + 1, e.message()));
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Notification(failures.join("; ")))
        }
    }
}
