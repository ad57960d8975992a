use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use skland_app::application::services::CheckInRunner;
use skland_domain::check_in::SklandApi;
use skland_domain::notification::NotificationSender;
use skland_infrastructure::config::AppConfig;
use skland_infrastructure::http::HttpClient;
use skland_infrastructure::logging;
use skland_infrastructure::notification::{create_senders, NotificationDispatcher};

#[derive(Parser, Debug)]
#[command(name = "skland-checkin", about = "Daily Skland check-in for Arknights and Endfield")]
struct CliArgs {
    /// Send a test message through every configured channel and exit
    #[arg(long)]
    test_notify: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = AppConfig::from_env();

    if let Err(e) = logging::init_logger(config.log_dir.as_deref()) {
        eprintln!("Failed to initialize logger: {:#}", e);
    }
    if let Some(path) = &config.env_file {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let dispatcher =
        NotificationDispatcher::new(config.notify.enabled, create_senders(&config.notify));

    if args.test_notify {
        dispatcher
            .test()
            .await
            .context("Notification channel test failed")?;
        tracing::info!("Every notification channel accepted the test message");
        return Ok(());
    }

    let api: Arc<dyn SklandApi> = Arc::new(
        HttpClient::new(&config.timeouts).context("Failed to build HTTP client")?,
    );
    let notifier: Arc<dyn NotificationSender> = Arc::new(dispatcher);

    let report = CheckInRunner::new(&config, api, notifier).run().await;
    tracing::info!(lines = report.lines().len(), "Check-in run finished");

    Ok(())
}
