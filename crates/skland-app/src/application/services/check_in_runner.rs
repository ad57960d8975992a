use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;

use skland_domain::account::{Credential, LoginToken};
use skland_domain::check_in::{CheckinHandler, SklandApi};
use skland_domain::game::{resolve_roles, Game};
use skland_domain::notification::{NotificationMessage, NotificationSender};
use skland_domain::report::RunReport;
use skland_domain::DomainError;
use skland_infrastructure::config::{AppConfig, TOKEN_ENV};

use super::handlers::handler_for;
use super::login::LoginService;

pub const RESULT_TITLE: &str = "森空岛每日签到结果";
pub const CONFIG_ERROR_TITLE: &str = "森空岛每日签到";

/// Runs every configured account through every game, one at a time
pub struct CheckInRunner {
    api: Arc<dyn SklandApi>,
    notifier: Arc<dyn NotificationSender>,
    tokens: Vec<LoginToken>,
    account_interval: Duration,
    handlers: Vec<Box<dyn CheckinHandler>>,
}

impl CheckInRunner {
    pub fn new(
        config: &AppConfig,
        api: Arc<dyn SklandApi>,
        notifier: Arc<dyn NotificationSender>,
    ) -> Self {
        let handlers = Game::ALL
            .into_iter()
            .map(|game| handler_for(game, api.clone()))
            .collect();

        Self {
            api,
            notifier,
            tokens: config.tokens.clone(),
            account_interval: config.timeouts.account_interval,
            handlers,
        }
    }

    pub async fn run(&self) -> RunReport {
        let mut report = RunReport::new();

        if self.tokens.is_empty() {
            let err = DomainError::Config(format!("未配置 {} 环境变量", TOKEN_ENV));
            error!("{}", err.format_with_code());
            report.push(format!("错误：{}", err.message()));
            self.notify(CONFIG_ERROR_TITLE, &report).await;
            return report;
        }

        info!("Starting check-in for {} account(s)", self.tokens.len());
        let login = LoginService::new(self.api.clone());

        for (index, token) in self.tokens.iter().enumerate() {
            let account = index + 1;
            push_line(&mut report, format!("===== 正在签到 账号[{}] =====", account));

            match login.login(token).await {
                Ok(credential) => self.check_in_account(&credential, &mut report).await,
                Err(e) => {
                    warn!("Account {} login failed: {}", account, e.format_with_code());
                    push_line(
                        &mut report,
                        format!("[账号{}] 签到失败：{}", account, e.message()),
                    );
                }
            }

            push_line(&mut report, format!("===== 账号[{}] 签到完成 =====\n", account));

            if account < self.tokens.len() && !self.account_interval.is_zero() {
                tokio::time::sleep(self.account_interval).await;
            }
        }

        if !report.is_empty() {
            self.notify(RESULT_TITLE, &report).await;
        }
        report
    }

    async fn check_in_account(&self, credential: &Credential, report: &mut RunReport) {
        for handler in &self.handlers {
            let game = handler.game();

            let roles = match self.api.bindings(credential).await {
                Ok(groups) => resolve_roles(game, groups),
                Err(e) => {
                    warn!("Fetching {} roles failed: {}", game, e.format_with_code());
                    push_line(report, format!("[{}] 签到失败：{}", game.name(), e.message()));
                    continue;
                }
            };
            if roles.is_empty() {
                info!("No {} roles bound", game);
                continue;
            }

            for role in &roles {
                match handler.handle(credential, role).await {
                    Ok(line) => push_line(report, line),
                    Err(e) => {
                        warn!("{} role check-in failed: {}", game, e.format_with_code());
                        push_line(
                            report,
                            format!("[{}] 角色签到失败：{}", game.name(), e.message()),
                        );
                    }
                }
            }
        }
    }

    async fn notify(&self, title: &str, report: &RunReport) {
        let message = NotificationMessage::new(title, report.render());
        if let Err(e) = self.notifier.send(&message).await {
            error!("Failed to deliver notification: {}", e.format_with_code());
        }
    }
}

fn push_line(report: &mut RunReport, line: String) {
    info!("{}", line);
    report.push(line);
}
