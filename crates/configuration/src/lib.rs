use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;
pub mod telemetry;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Config, LoggingConfig, SourcesConfig, StorageConfig};
pub use telemetry::init_tracing;

/// Prefix for environment overrides, e.g. `MARKET__STORAGE__ARTIFACT_PATH`.
pub const ENV_PREFIX: &str = "MARKET";

/// Loads the application configuration.
///
/// Built-in defaults come first, then the TOML file at `path` if it exists,
/// then `MARKET__*` environment variables. A missing file is not an error;
/// a malformed one is.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let defaults = Config::default();

    let builder = config::Config::builder()
        .set_default("sources.listings_url", defaults.sources.listings_url)?
        .set_default("sources.benchmarks_url", defaults.sources.benchmarks_url)?
        .set_default("sources.currency_url", defaults.sources.currency_url)?
        .set_default("sources.request_timeout_secs", defaults.sources.request_timeout_secs as i64)?
        .set_default("sources.max_retries", defaults.sources.max_retries as i64)?
        .set_default("sources.retry_backoff_ms", defaults.sources.retry_backoff_ms as i64)?
        .set_default("storage.artifact_path", defaults.storage.artifact_path)?
        .set_default("logging.level", defaults.logging.level)?
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.storage.artifact_path, "cars_data.json");
        assert_eq!(config.sources.max_retries, 2);
        assert!(config.sources.listings_url.ends_with("cars.json"));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[storage]\nartifact_path = \"out/enriched.json\"\n\n[sources]\nmax_retries = 5\n"
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.storage.artifact_path, "out/enriched.json");
        assert_eq!(config.sources.max_retries, 5);
        assert_eq!(config.sources.request_timeout_secs, 10);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage\nartifact_path = ").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sources]\nrequest_timeout_secs = 0\n").unwrap();

        assert!(matches!(
            load_config(&path),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
