use std::path::Path;

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    fn load_dotenv() {
        // crate root first, then the working directory
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_filename(manifest_dir.join(".env")).or_else(|_| dotenvy::dotenv());
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_source(source: config_rs::Environment) -> Result<Self> {
        let settings = config_rs::Config::builder()
            .add_source(source)
            .build()
            .context("failed to read environment variables for config")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();
        Self::from_source(Self::environment())
    }

    fn environment() -> config_rs::Environment {
        config_rs::Environment::with_prefix(Self::PREFIX)
            .prefix_separator("_")
            .separator(Self::SEPARATOR)
            .try_parsing(true)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::EnvConfig;
    use crate::config::{AppConfig, defaults};

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_source(AppConfig::environment().source(Some(source)))
    }

    #[test]
    fn falls_back_to_defaults_when_nothing_is_set() {
        let cfg = load(&[]).expect("empty environment should load");

        assert_eq!(cfg.general.port, defaults::PORT);
        assert_eq!(cfg.database.url, defaults::DATABASE_URL);
    }

    #[test]
    fn reads_port_and_database_url_overrides() {
        let cfg = load(&[
            ("APP_GENERAL__PORT", "8080"),
            ("APP_DATABASE__URL", "memory://"),
        ])
        .expect("overrides should load");

        assert_eq!(cfg.general.port, 8080);
        assert_eq!(cfg.database.url, "memory://");
        assert_eq!(cfg.general.host, defaults::HOST);
    }

    #[test]
    fn rejects_a_port_that_is_not_a_number() {
        let err = load(&[("APP_GENERAL__PORT", "eighty")]).expect_err("bad port should fail");

        assert!(err.to_string().contains("deserialize"));
    }
}
