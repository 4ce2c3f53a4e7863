use dms_config::shared::{AwsConfig, NotifierConfig, TaskConfig, ValidatorConfig};
use dms_validation::dms::aws::AwsDmsClient;
use dms_validation::notifier::http::HttpNotifier;
use dms_validation::types::ReplicationTask;
use dms_validation::validator::{ValidationReport, Validator};
use tracing::{debug, info};

/// Runs the validator once over every configured task.
///
/// Builds the AWS DMS client and the HTTP notifier from the configuration and returns
/// the run's report. DMS errors other than a missing task abort the run.
pub async fn start_validator_with_config(
    validator_config: ValidatorConfig,
) -> anyhow::Result<ValidationReport> {
    info!("starting dms validator");

    log_config(&validator_config);

    let client = AwsDmsClient::new(&validator_config.aws).await;
    let notifier = HttpNotifier::new(&validator_config.notifier)?;

    let tasks = validator_config
        .tasks
        .into_iter()
        .map(ReplicationTask::from)
        .collect();

    let validator = Validator::new(tasks, client, notifier);
    let report = validator.run().await?;

    info!("dms validator completed");

    Ok(report)
}

fn log_config(config: &ValidatorConfig) {
    log_tasks_config(&config.tasks);
    log_aws_config(&config.aws);
    log_notifier_config(&config.notifier);
}

fn log_tasks_config(tasks: &[TaskConfig]) {
    for task in tasks {
        debug!(name = %task.name, arn = %task.arn, "replication task config");
    }
}

fn log_aws_config(config: &AwsConfig) {
    debug!(
        region = %config.region,
        endpoint_url = ?config.endpoint_url,
        access_key_id_configured = config.access_key_id.is_some(),
        secret_access_key_configured = config.secret_access_key.is_some(),
        "aws config"
    );
}

fn log_notifier_config(config: &NotifierConfig) {
    debug!(
        url = %config.url,
        timeout_ms = ?config.timeout_ms,
        "notifier config"
    );
}
