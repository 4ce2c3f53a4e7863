use serde::de::DeserializeOwned;
use std::path::Path;

use crate::environment::Environment;

/// Directory containing configuration files relative to the working directory.
const CONFIGURATION_DIR: &str = "configuration";

/// Base configuration file loaded for all environments.
const BASE_CONFIG_FILE: &str = "base.yaml";

/// Prefix for environment variable configuration overrides.
const ENV_PREFIX: &str = "APP";

/// Separator between environment variable prefix and key segments.
const ENV_PREFIX_SEPARATOR: &str = "_";

/// Separator for nested configuration keys in environment variables.
///
/// Example: `APP_NOTIFIER__URL` sets the `notifier.url` field.
const ENV_SEPARATOR: &str = "__";

/// Loads hierarchical configuration from `./configuration` and environment variables.
///
/// Loads configuration in this order:
/// 1. Base configuration from `configuration/base.yaml`
/// 2. Environment-specific file from `configuration/{environment}.yaml`, if present
/// 3. Environment variable overrides prefixed with `APP`
///
/// Nested keys use double underscores: `APP_AWS__REGION` → `aws.region`.
pub fn load_config<T>() -> Result<T, config::ConfigError>
where
    T: DeserializeOwned,
{
    let base_path =
        std::env::current_dir().map_err(|err| config::ConfigError::Foreign(Box::new(err)))?;
    let environment =
        Environment::load().map_err(|err| config::ConfigError::Foreign(Box::new(err)))?;

    load_config_from(&base_path.join(CONFIGURATION_DIR), environment)
}

/// Loads configuration from an explicit directory for a given [`Environment`].
///
/// Same layering as [`load_config`].
pub fn load_config_from<T>(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<T, config::ConfigError>
where
    T: DeserializeOwned,
{
    let environment_filename = format!("{environment}.yaml");

    let environment_source = config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_PREFIX_SEPARATOR)
        .separator(ENV_SEPARATOR);

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join(BASE_CONFIG_FILE),
        ))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        // E.g. `APP_NOTIFIER__URL=https://example.com/events` sets
        // `ValidatorConfig { notifier: NotifierConfig { url } }`.
        .add_source(environment_source)
        .build()?;

    settings.try_deserialize::<T>()
}
