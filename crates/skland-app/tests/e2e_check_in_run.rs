/// E2E Test: Check-in Run
///
/// Drives the runner end to end against mocked Skland API and notifier:
/// 1. Mixed success and login failure across accounts
/// 2. Missing token configuration
/// 3. Role-level failure isolation
/// 4. Binding fetch failures
/// 5. Notification delivery failures
use async_trait::async_trait;
use mockall::mock;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use skland_app::application::services::check_in_runner::{CONFIG_ERROR_TITLE, RESULT_TITLE};
use skland_app::application::services::CheckInRunner;
use skland_domain::account::{Credential, GrantCode, LoginToken};
use skland_domain::check_in::{
    AttendanceRequest, AttendanceResponse, SklandApi, MISSING_ROLE_PARAMS,
};
use skland_domain::game::{BindingGroup, Game};
use skland_domain::notification::{NotificationMessage, NotificationSender};
use skland_domain::DomainError;
use skland_infrastructure::config::{AppConfig, TimeoutConfig};
use skland_infrastructure::notification::NotificationDispatcher;

mock! {
    pub Api {}

    #[async_trait]
    impl SklandApi for Api {
        async fn grant_code(&self, token: &str) -> Result<GrantCode, DomainError>;
        async fn credential(&self, grant_code: &GrantCode) -> Result<Credential, DomainError>;
        async fn bindings(&self, credential: &Credential) -> Result<Vec<BindingGroup>, DomainError>;
        async fn attendance(
            &self,
            credential: &Credential,
            game: Game,
            request: &AttendanceRequest,
        ) -> Result<AttendanceResponse, DomainError>;
    }
}

mock! {
    pub Notifier {}

    #[async_trait]
    impl NotificationSender for Notifier {
        async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError>;
        async fn test(&self) -> Result<(), DomainError>;
    }
}

fn config(tokens: &[&str]) -> AppConfig {
    AppConfig {
        tokens: tokens.iter().map(|t| LoginToken::new(*t)).collect(),
        timeouts: TimeoutConfig::default().with_account_interval(Duration::ZERO),
        ..Default::default()
    }
}

fn groups(value: serde_json::Value) -> Vec<BindingGroup> {
    serde_json::from_value(value).unwrap()
}

fn arknights_uid(request: &AttendanceRequest) -> Option<&str> {
    match request {
        AttendanceRequest::Arknights(body) => body.uid.as_deref(),
        AttendanceRequest::Endfield(_) => None,
    }
}

fn expect_login(api: &mut MockApi) {
    api.expect_grant_code()
        .returning(|_| Ok(GrantCode::new("grant")));
    api.expect_credential()
        .returning(|_| Ok(Credential::new("cred", "sign-token")));
}

#[tokio::test]
async fn e2e_run_success_and_login_failure() {
    // ============================================================
    // Setup: account 1 logs in with one Arknights role,
    // account 2 is rejected at the grant step
    // ============================================================
    let mut api = MockApi::new();
    api.expect_grant_code().returning(|token| match token {
        "good-token" => Ok(GrantCode::new("grant")),
        _ => Err(DomainError::Auth("获取 grant code 失败：token 已过期".to_string())),
    });
    api.expect_credential()
        .times(1)
        .returning(|_| Ok(Credential::new("cred", "sign-token")));
    api.expect_bindings().times(2).returning(|_| {
        Ok(groups(json!([{
            "appCode": "arknights",
            "bindingList": [{
                "nickName": "Doctor",
                "channelName": "官服",
                "uid": "123",
                "channelMasterId": "1"
            }]
        }])))
    });
    api.expect_attendance()
        .withf(|_, game, _| *game == Game::Arknights)
        .times(1)
        .returning(|_, _, _| {
            Ok(AttendanceResponse::ok(json!({
                "awards": [{"resource": {"name": "龙门币"}, "count": 500}]
            })))
        });

    let mut notifier = MockNotifier::new();
    notifier
        .expect_send()
        .withf(|message| {
            message.title == RESULT_TITLE
                && message.content.contains("成功！获得：龙门币x500")
                && message.content.contains("[账号2] 签到失败")
        })
        .times(1)
        .returning(|_| Ok(()));

    // ============================================================
    // Run
    // ============================================================
    let runner = CheckInRunner::new(
        &config(&["good-token", "expired-token"]),
        Arc::new(api),
        Arc::new(notifier),
    );
    let report = runner.run().await;

    // ============================================================
    // Verify report order
    // ============================================================
    let lines = report.lines();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "===== 正在签到 账号[1] =====");
    assert!(lines[1].starts_with("[明日方舟]"));
    assert!(lines[1].contains("Doctor（官服）"));
    assert!(lines[1].ends_with("结果：成功！获得：龙门币x500"));
    assert_eq!(lines[2], "===== 账号[1] 签到完成 =====\n");
    assert_eq!(lines[3], "===== 正在签到 账号[2] =====");
    assert_eq!(lines[4], "[账号2] 签到失败：获取 grant code 失败：token 已过期");
    assert_eq!(lines[5], "===== 账号[2] 签到完成 =====\n");

    println!("✓ Mixed account run produced the expected report");
}

#[tokio::test]
async fn e2e_run_without_tokens() {
    // No expectations: any API call panics
    let api = MockApi::new();

    let mut notifier = MockNotifier::new();
    notifier
        .expect_send()
        .withf(|message| {
            message.title == CONFIG_ERROR_TITLE
                && message.content == "错误：未配置 SKYLAND_TOKEN 环境变量\n"
        })
        .times(1)
        .returning(|_| Ok(()));

    let runner = CheckInRunner::new(&config(&[]), Arc::new(api), Arc::new(notifier));
    let report = runner.run().await;

    assert_eq!(report.lines(), ["错误：未配置 SKYLAND_TOKEN 环境变量".to_string()]);

    println!("✓ Missing token configuration reported once");
}

#[tokio::test]
async fn e2e_role_failure_does_not_stop_siblings() {
    let mut api = MockApi::new();
    expect_login(&mut api);
    api.expect_bindings().returning(|_| {
        Ok(groups(json!([
            {
                "appCode": "arknights",
                "bindingList": [
                    {"nickName": "First", "channelName": "官服", "uid": "1", "channelMasterId": "1"},
                    {"nickName": "Second", "channelName": "B服", "uid": "2", "channelMasterId": "2"}
                ]
            },
            {
                "appCode": "endfield",
                "bindingList": [{"channelName": "官服", "uid": "9", "defaultRole": {"nickname": "管理员"}}]
            }
        ])))
    });
    api.expect_attendance()
        .withf(|_, _, request| arknights_uid(request) == Some("1"))
        .times(1)
        .returning(|_, _, _| Err(DomainError::Network("connection reset".to_string())));
    api.expect_attendance()
        .withf(|_, _, request| arknights_uid(request) == Some("2"))
        .times(1)
        .returning(|_, _, _| Ok(AttendanceResponse::failed(10001, "请勿重复签到！")));

    let mut notifier = MockNotifier::new();
    notifier.expect_send().times(1).returning(|_| Ok(()));

    let runner = CheckInRunner::new(&config(&["token"]), Arc::new(api), Arc::new(notifier));
    let report = runner.run().await;

    let lines = report.lines();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "[明日方舟] 角色签到失败：connection reset");
    assert!(lines[2].contains("Second（B服）"));
    assert!(lines[2].ends_with("结果：今日已签到，请勿重复签到"));
    assert!(lines[3].starts_with("[明日方舟：终末地]"));
    assert!(lines[3].ends_with(&format!("结果：{}", MISSING_ROLE_PARAMS)));

    println!("✓ Role failure isolated from sibling roles");
}

#[tokio::test]
async fn e2e_binding_failure_reported_per_game() {
    let mut api = MockApi::new();
    expect_login(&mut api);
    api.expect_bindings()
        .times(2)
        .returning(|_| Err(DomainError::Role("获取角色失败：用户未登录".to_string())));
    api.expect_attendance().never();

    let runner = CheckInRunner::new(
        &config(&["token"]),
        Arc::new(api),
        Arc::new(NotificationDispatcher::disabled()),
    );
    let report = runner.run().await;

    assert!(report.contains("[明日方舟] 签到失败：获取角色失败：用户未登录"));
    assert!(report.contains("[明日方舟：终末地] 签到失败：获取角色失败：用户未登录"));
    assert_eq!(report.lines().len(), 4);

    println!("✓ Binding failures reported for every game");
}

#[tokio::test]
async fn e2e_notification_failure_keeps_report() {
    let mut api = MockApi::new();
    expect_login(&mut api);
    api.expect_bindings().returning(|_| Ok(Vec::new()));

    let mut notifier = MockNotifier::new();
    notifier
        .expect_send()
        .times(1)
        .returning(|_| Err(DomainError::Notification("webhook unreachable".to_string())));

    let runner = CheckInRunner::new(&config(&["token"]), Arc::new(api), Arc::new(notifier));
    let report = runner.run().await;

    assert_eq!(
        report.lines(),
        [
            "===== 正在签到 账号[1] =====".to_string(),
            "===== 账号[1] 签到完成 =====\n".to_string(),
        ]
    );

    println!("✓ Notification failure does not affect the report");
}

#[tokio::test(start_paused = true)]
async fn e2e_pause_between_accounts_but_not_after_last() {
    let interval = Duration::from_secs(5);
    let paced = |count: usize| AppConfig {
        tokens: (0..count).map(|i| LoginToken::new(format!("token-{}", i))).collect(),
        timeouts: TimeoutConfig::default().with_account_interval(interval),
        ..Default::default()
    };

    // ============================================================
    // Three accounts: two pauses
    // ============================================================
    let mut api = MockApi::new();
    api.expect_grant_code()
        .times(3)
        .returning(|_| Err(DomainError::Auth("获取 grant code 失败：x".to_string())));
    let mut notifier = MockNotifier::new();
    notifier.expect_send().times(1).returning(|_| Ok(()));

    let runner = CheckInRunner::new(&paced(3), Arc::new(api), Arc::new(notifier));
    let started = tokio::time::Instant::now();
    let report = runner.run().await;
    let elapsed = started.elapsed();

    assert_eq!(report.lines().len(), 9);
    assert!(elapsed >= interval * 2, "paused {:?}", elapsed);
    assert!(elapsed < interval * 3, "paused {:?}", elapsed);

    // ============================================================
    // One account: no pause at all
    // ============================================================
    let mut api = MockApi::new();
    api.expect_grant_code()
        .times(1)
        .returning(|_| Err(DomainError::Auth("获取 grant code 失败：x".to_string())));
    let mut notifier = MockNotifier::new();
    notifier.expect_send().times(1).returning(|_| Ok(()));

    let runner = CheckInRunner::new(&paced(1), Arc::new(api), Arc::new(notifier));
    let started = tokio::time::Instant::now();
    runner.run().await;

    assert!(started.elapsed() < interval);

    println!("✓ Accounts paced by the configured interval");
}
