//! Tracing initialization

use tracing_subscriber::EnvFilter;

/// Initialize JSON-formatted tracing with an env-filter
///
/// `level` is a tracing filter directive ("info", "repokit=debug", ...).
/// Falls back to `info` when the directive does not parse. Call once at
/// startup; a second call panics, as the global subscriber is already set.
pub fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("tracing initialized");
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::EnvFilter;

    #[test]
    fn test_filter_directive_parses() {
        assert!(EnvFilter::try_new("repokit=debug").is_ok());
        assert!(EnvFilter::try_new("not a directive !!!").is_err());
    }
}
