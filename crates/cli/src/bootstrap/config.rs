use ntopng_exporter_domain::{CliOverrides, Config};

/// Loads the configuration and rejects it before anything else starts.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
