use aws_config::{BehaviorVersion, Region};
use aws_sdk_databasemigration::Client;
use aws_sdk_databasemigration::config::Credentials;
use aws_sdk_databasemigration::error::DisplayErrorContext;
use aws_sdk_databasemigration::types::{Filter, TableStatistics};
use dms_config::shared::AwsConfig;
use secrecy::ExposeSecret;
use tracing::{debug, info};

use crate::dms::base::DmsClient;
use crate::error::{DmsError, DmsResult};
use crate::types::{ReplicationTaskDescription, TableStatistic, ValidationState};

/// Name of the DMS filter selecting replication tasks by ARN.
const REPLICATION_TASK_ARN_FILTER: &str = "replication-task-arn";

/// Provider name attached to credentials resolved by [`resolve_credentials`].
const CREDENTIALS_PROVIDER_NAME: &str = "dms-validator";

const ACCESS_KEY_ID_ENV: &str = "AWS_ACCESS_KEY_ID";
const SECRET_ACCESS_KEY_ENV: &str = "AWS_SECRET_ACCESS_KEY";
const SESSION_TOKEN_ENV: &str = "AWS_SESSION_TOKEN";

/// [`DmsClient`] backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct AwsDmsClient {
    client: Client,
}

impl AwsDmsClient {
    /// Builds a client for the configured region.
    ///
    /// Credentials come from [`resolve_credentials`] and fall back to the SDK's
    /// default provider chain when not fully resolved.
    pub async fn new(config: &AwsConfig) -> AwsDmsClient {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        match resolve_credentials(config, |key| std::env::var(key).ok()) {
            Some(credentials) => {
                info!("using static aws credentials");
                loader = loader.credentials_provider(credentials);
            }
            None => info!("no static aws credentials found, using the default provider chain"),
        }

        let sdk_config = loader.load().await;

        AwsDmsClient {
            client: Client::new(&sdk_config),
        }
    }

    pub fn from_client(client: Client) -> AwsDmsClient {
        AwsDmsClient { client }
    }
}

/// Resolves static credentials, preferring environment variables over configured secrets.
///
/// Each of the access key id and secret access key is looked up independently. Returns
/// `None` unless both were found.
pub fn resolve_credentials<F>(config: &AwsConfig, env: F) -> Option<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |env_name: &str, configured: Option<&str>| {
        env(env_name)
            .filter(|value| !value.is_empty())
            .or_else(|| configured.map(ToOwned::to_owned))
    };

    let access_key_id = lookup(
        ACCESS_KEY_ID_ENV,
        config.access_key_id.as_ref().map(|s| s.expose_secret()),
    )?;
    let secret_access_key = lookup(
        SECRET_ACCESS_KEY_ENV,
        config.secret_access_key.as_ref().map(|s| s.expose_secret()),
    )?;
    let session_token = env(SESSION_TOKEN_ENV).filter(|value| !value.is_empty());

    Some(Credentials::new(
        access_key_id,
        secret_access_key,
        session_token,
        None,
        CREDENTIALS_PROVIDER_NAME,
    ))
}

/// Normalizes the counters DMS returns, treating absent or negative values as zero.
trait IntoCount {
    fn into_count(self) -> u64;
}

impl IntoCount for i64 {
    fn into_count(self) -> u64 {
        u64::try_from(self).unwrap_or(0)
    }
}

impl IntoCount for Option<i64> {
    fn into_count(self) -> u64 {
        self.map_or(0, IntoCount::into_count)
    }
}

fn table_statistic_from_sdk(statistics: &TableStatistics) -> TableStatistic {
    TableStatistic {
        schema_name: statistics.schema_name().unwrap_or_default().to_owned(),
        table_name: statistics.table_name().unwrap_or_default().to_owned(),
        inserts: statistics.inserts().into_count(),
        updates: statistics.updates().into_count(),
        deletes: statistics.deletes().into_count(),
        applied_inserts: statistics.applied_inserts().into_count(),
        applied_updates: statistics.applied_updates().into_count(),
        applied_deletes: statistics.applied_deletes().into_count(),
        validation_state: statistics
            .validation_state()
            .map(ValidationState::from)
            .unwrap_or(ValidationState::NotEnabled),
    }
}

impl DmsClient for AwsDmsClient {
    async fn describe_replication_task(
        &self,
        task_arn: &str,
    ) -> DmsResult<ReplicationTaskDescription> {
        let filter = Filter::builder()
            .name(REPLICATION_TASK_ARN_FILTER)
            .values(task_arn)
            .build()
            .map_err(|err| DmsError::InvalidRequest(err.to_string()))?;

        let output = match self
            .client
            .describe_replication_tasks()
            .filters(filter)
            .send()
            .await
        {
            Ok(output) => output,
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|err| err.is_resource_not_found_fault()) =>
            {
                return Err(DmsError::ReplicationTaskNotFound(task_arn.to_owned()));
            }
            Err(err) => {
                return Err(DmsError::DescribeReplicationTasks {
                    arn: task_arn.to_owned(),
                    message: DisplayErrorContext(&err).to_string(),
                });
            }
        };

        // The filter may also match nothing without DMS raising a fault.
        let task = output
            .replication_tasks()
            .first()
            .ok_or_else(|| DmsError::ReplicationTaskNotFound(task_arn.to_owned()))?;

        Ok(ReplicationTaskDescription {
            identifier: task.replication_task_identifier().map(ToOwned::to_owned),
            status: task.status().map(ToOwned::to_owned),
        })
    }

    async fn describe_table_statistics(&self, task_arn: &str) -> DmsResult<Vec<TableStatistic>> {
        let mut table_statistics = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let output = self
                .client
                .describe_table_statistics()
                .replication_task_arn(task_arn)
                .set_marker(marker.take())
                .send()
                .await
                .map_err(|err| DmsError::DescribeTableStatistics {
                    arn: task_arn.to_owned(),
                    message: DisplayErrorContext(&err).to_string(),
                })?;

            table_statistics.extend(
                output
                    .table_statistics()
                    .iter()
                    .map(table_statistic_from_sdk),
            );

            match output.marker() {
                Some(next) if !next.is_empty() => {
                    debug!(
                        fetched = table_statistics.len(),
                        "fetching next page of table statistics"
                    );
                    marker = Some(next.to_owned());
                }
                _ => break,
            }
        }

        Ok(table_statistics)
    }
}
