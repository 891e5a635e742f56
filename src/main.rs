use std::process::ExitCode;

use gpu_price_watch::{config, services::price_source::StaticPriceSource, Monitor, MonitorResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("monitor failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> MonitorResult<()> {
    let settings = config::load()?;

    tracing::info!(
        db = %settings.db_path.display(),
        started_at = %gpu_price_watch::services::report::local_timestamp(chrono::Utc::now()),
        "👑 GPU price watch starting"
    );

    let monitor = Monitor::new(settings, Box::new(StaticPriceSource::gpus()))?;

    let stdout = std::io::stdout();
    let summary = monitor.run(&mut stdout.lock())?;

    tracing::info!(
        checked = summary.checked,
        alerts = summary.alerts.len(),
        "📈 monitoring complete"
    );
    Ok(())
}
