//! Logging setup.
//!
//! The pipeline emits `tracing` events; hosts that want to see them call
//! [`init_logging`] once at startup.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVE: &str = "protein_lens=info";

/// Installs a formatted subscriber as the global default.
///
/// `RUST_LOG` takes precedence over `default_directive`. Returns an error if a
/// global subscriber is already installed.
pub fn init_logging(default_directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| anyhow!("Invalid log directive '{}': {}", default_directive, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_does_not_panic() {
        let _ = init_logging(DEFAULT_DIRECTIVE);
        assert!(init_logging(DEFAULT_DIRECTIVE).is_err());
    }
}
