mod dingtalk;
mod dispatcher;
mod feishu;
mod sender_factory;

pub use dingtalk::DingTalkWebhookSender;
pub use dispatcher::{collapse_whitespace, NotificationDispatcher};
pub use feishu::FeishuWebhookSender;
pub use sender_factory::create_senders;

/// Message sent by `--test-notify`
pub const TEST_TITLE: &str = "森空岛签到测试通知";
pub const TEST_CONTENT: &str = "收到这条消息说明通知渠道配置正确";
