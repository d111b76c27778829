//! Tracing initialization

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Error, error::Result};

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `service.log_level` when set. The output
/// is JSON unless `service.log_format` is `"pretty"`.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.service.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match config.service.log_format.as_str() {
        "pretty" => builder.pretty().try_init(),
        "json" => builder.json().try_init(),
        other => {
            eprintln!("Unknown log format '{other}', using json");
            builder.json().try_init()
        }
    };
    result.map_err(|e| Error::Internal(format!("Failed to initialize tracing: {e}")))?;

    tracing::info!(
        service = %config.service.name,
        environment = %config.service.environment,
        "Tracing initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        let config = Config::default();
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }
}
