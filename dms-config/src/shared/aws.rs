use serde::{Deserialize, Serialize};

use crate::SerializableSecretString;

/// Region used when none is configured.
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

fn default_region() -> String {
    DEFAULT_AWS_REGION.to_owned()
}

/// Settings for the AWS DMS client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Region the replication tasks live in.
    #[serde(default = "default_region")]
    pub region: String,
    /// Overrides the DMS endpoint, e.g. for LocalStack or VPC endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    /// Access key id used when `AWS_ACCESS_KEY_ID` is not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<SerializableSecretString>,
    /// Secret access key used when `AWS_SECRET_ACCESS_KEY` is not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<SerializableSecretString>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint_url: None,
            access_key_id: None,
            secret_access_key: None,
        }
    }
}
