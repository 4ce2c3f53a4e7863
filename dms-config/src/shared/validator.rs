use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::shared::{AwsConfig, NotifierConfig, SentryConfig, TaskConfig, ValidationError};

/// Complete configuration for the validator binary.
///
/// Typically loaded with [`crate::load_config`] from `configuration/*.yaml` and
/// `APP_`-prefixed environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ValidatorConfig {
    /// Replication tasks to validate, processed in the given order.
    pub tasks: Vec<TaskConfig>,
    /// AWS DMS client settings.
    #[serde(default)]
    pub aws: AwsConfig,
    /// Endpoint receiving one event per validated task.
    pub notifier: NotifierConfig,
    /// Optional Sentry configuration for error reporting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentry: Option<SentryConfig>,
}

impl ValidatorConfig {
    /// Validates the complete validator configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tasks.is_empty() {
            return Err(ValidationError::NoTasks);
        }

        let mut seen = HashSet::with_capacity(self.tasks.len());
        for (position, task) in self.tasks.iter().enumerate() {
            if task.name.is_empty() {
                return Err(ValidationError::EmptyTaskName(position));
            }
            if task.arn.is_empty() {
                return Err(ValidationError::EmptyTaskArn(task.name.clone()));
            }
            if !seen.insert(task.name.as_str()) {
                return Err(ValidationError::DuplicateTaskName(task.name.clone()));
            }
        }

        if self.aws.region.is_empty() {
            return Err(ValidationError::EmptyRegion);
        }

        self.notifier.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::DEFAULT_AWS_REGION;
    use secrecy::ExposeSecret;

    fn parse(yaml: &str) -> ValidatorConfig {
        config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    fn valid_config() -> ValidatorConfig {
        parse(
            r#"
tasks:
  - name: task1
    arn: arn:aws:dms:us-east-1:123456789012:task:task1
  - name: task2
    arn: arn:aws:dms:us-east-1:123456789012:task:task2
notifier:
  url: https://notifier.example.com/events
"#,
        )
    }

    #[test]
    fn deserializes_with_defaults() {
        let config = valid_config();

        assert_eq!(config.tasks.len(), 2);
        assert_eq!(config.tasks[0].name, "task1");
        assert_eq!(config.aws.region, DEFAULT_AWS_REGION);
        assert!(config.aws.access_key_id.is_none());
        assert!(config.notifier.timeout_ms.is_none());
        assert!(config.sentry.is_none());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn deserializes_aws_secrets() {
        let config = parse(
            r#"
tasks:
  - name: task1
    arn: arn:aws:dms:task1
aws:
  region: eu-west-1
  access_key_id: AKIAEXAMPLE
  secret_access_key: very-secret
notifier:
  url: http://localhost:8080/events
  timeout_ms: 5000
"#,
        );

        assert_eq!(config.aws.region, "eu-west-1");
        assert_eq!(
            config.aws.access_key_id.as_ref().unwrap().expose_secret(),
            "AKIAEXAMPLE"
        );
        assert_eq!(config.notifier.timeout_ms, Some(5000));
        assert!(!format!("{config:?}").contains("very-secret"));
    }

    #[test]
    fn rejects_empty_task_list() {
        let mut config = valid_config();
        config.tasks.clear();

        assert_eq!(config.validate(), Err(ValidationError::NoTasks));
    }

    #[test]
    fn rejects_duplicate_task_names() {
        let mut config = valid_config();
        config.tasks[1].name = "task1".to_owned();

        assert_eq!(
            config.validate(),
            Err(ValidationError::DuplicateTaskName("task1".to_owned()))
        );
    }

    #[test]
    fn rejects_empty_name_and_arn() {
        let mut config = valid_config();
        config.tasks[1].name.clear();
        assert_eq!(config.validate(), Err(ValidationError::EmptyTaskName(1)));

        let mut config = valid_config();
        config.tasks[0].arn.clear();
        assert_eq!(
            config.validate(),
            Err(ValidationError::EmptyTaskArn("task1".to_owned()))
        );
    }

    #[test]
    fn rejects_invalid_notifier_settings() {
        let mut config = valid_config();
        config.notifier.url = "ftp://notifier".to_owned();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidNotifierUrl("ftp://notifier".to_owned()))
        );

        let mut config = valid_config();
        config.notifier.timeout_ms = Some(0);
        assert_eq!(config.validate(), Err(ValidationError::NotifierTimeoutZero));
    }

    #[test]
    fn rejects_empty_region() {
        let mut config = valid_config();
        config.aws.region.clear();

        assert_eq!(config.validate(), Err(ValidationError::EmptyRegion));
    }
}
