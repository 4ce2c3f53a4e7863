use dms_config::load_config;
use dms_config::shared::ValidatorConfig;

/// Loads the [`ValidatorConfig`] and validates it.
pub fn load_validator_config() -> anyhow::Result<ValidatorConfig> {
    let config = load_config::<ValidatorConfig>()?;
    config.validate()?;

    Ok(config)
}
