use crate::config::load_validator_config;
use crate::core::start_validator_with_config;
use dms_config::Environment;
use dms_config::shared::ValidatorConfig;
use dms_telemetry::init_tracing_with_run_id;
use dms_validation::validator::ValidationReport;
use std::sync::Arc;
use tracing::{error, info};

mod config;
mod core;

fn main() -> anyhow::Result<()> {
    let validator_config = load_validator_config()?;

    // Every log line of this run carries the same id.
    let run_id = uuid::Uuid::new_v4().to_string();
    let _log_flusher = init_tracing_with_run_id(env!("CARGO_BIN_NAME"), Some(run_id))?;

    // Initialize Sentry before the async runtime starts
    let _sentry_guard = init_sentry(&validator_config)?;

    // Tasks are validated one at a time, a single thread is enough.
    let report = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main(validator_config))?;

    info!(
        tasks = report.tasks.len(),
        issues = report.issues_detected(),
        "validation report"
    );

    Ok(())
}

async fn async_main(validator_config: ValidatorConfig) -> anyhow::Result<ValidationReport> {
    report_failure(start_validator_with_config(validator_config).await)
}

/// Sends any error of the run, including setup failures, to Sentry and the logs.
fn report_failure<T>(result: anyhow::Result<T>) -> anyhow::Result<T> {
    if let Err(err) = &result {
        let dyn_err: &(dyn std::error::Error + 'static) = err.as_ref();
        sentry::capture_error(dyn_err);
        error!("an error occurred in the dms validator: {err}");
    }

    result
}

/// Initializes Sentry if a DSN is configured.
///
/// Tags all events with the "dms-validator" service identifier and captures panics.
fn init_sentry(config: &ValidatorConfig) -> anyhow::Result<Option<sentry::ClientInitGuard>> {
    if let Some(sentry_config) = &config.sentry {
        info!("initializing sentry with supplied dsn");

        let environment = Environment::load()?;
        let guard = sentry::init(sentry::ClientOptions {
            dsn: Some(sentry_config.dsn.parse()?),
            environment: Some(environment.to_string().into()),
            integrations: vec![Arc::new(
                sentry::integrations::panic::PanicIntegration::new(),
            )],
            ..Default::default()
        });

        sentry::configure_scope(|scope| {
            scope.set_tag("service", "dms-validator");
        });

        return Ok(Some(guard));
    }

    info!("sentry not configured for dms validator, skipping initialization");

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_sent_to_sentry() {
        let events = sentry::test::with_captured_events(|| {
            let result = report_failure::<()>(Err(anyhow::anyhow!("failed to build notifier")));
            assert!(result.is_err());
        });

        assert_eq!(events.len(), 1);
        let exception = &events[0].exception.values[0];
        assert_eq!(exception.value.as_deref(), Some("failed to build notifier"));
    }

    #[test]
    fn successful_runs_send_nothing() {
        let events = sentry::test::with_captured_events(|| {
            assert!(report_failure(Ok(())).is_ok());
        });

        assert!(events.is_empty());
    }
}
