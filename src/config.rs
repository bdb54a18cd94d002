use anyhow::{bail, Context, Result};

/// Runtime configuration, resolved from the environment once at startup and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub upstream_endpoint: String,
    pub upstream_timeout_secs: u64,
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;
const DEFAULT_UPSTREAM_ENDPOINT: &str = "https://api.mymemory.translated.net/get";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

impl Config {
    /// Resolve configuration from process environment variables.
    ///
    /// A variable that is set but unparsable is a startup error, not a silent
    /// fallback to the default.
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
            std::env::var("TRANSLATE_API_URL").ok(),
            std::env::var("UPSTREAM_TIMEOUT_SECS").ok(),
        )
    }

    fn resolve(
        host: Option<String>,
        port: Option<String>,
        upstream_endpoint: Option<String>,
        upstream_timeout_secs: Option<String>,
    ) -> Result<Self> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let upstream_endpoint =
            upstream_endpoint.unwrap_or_else(|| DEFAULT_UPSTREAM_ENDPOINT.to_string());
        if upstream_endpoint.trim().is_empty() {
            bail!("TRANSLATE_API_URL must not be empty");
        }

        let upstream_timeout_secs = match upstream_timeout_secs {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("invalid UPSTREAM_TIMEOUT_SECS value: {raw:?}"))?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            host,
            port,
            upstream_endpoint,
            upstream_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::resolve(None, None, None, None).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5001);
        assert_eq!(config.upstream_endpoint, DEFAULT_UPSTREAM_ENDPOINT);
        assert_eq!(config.upstream_timeout_secs, 30);
    }

    #[test]
    fn explicit_port_overrides_default() {
        let config = Config::resolve(None, Some("8080".to_string()), None, None).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn unparsable_port_is_a_startup_error() {
        let err = Config::resolve(None, Some("not-a-port".to_string()), None, None).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn empty_upstream_endpoint_is_rejected() {
        let err = Config::resolve(None, None, Some("  ".to_string()), None).unwrap_err();
        assert!(err.to_string().contains("TRANSLATE_API_URL"));
    }
}
