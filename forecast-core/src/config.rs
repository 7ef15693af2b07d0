use serde::{Deserialize, Serialize};

/// Client configuration for the Open-Meteo forecast API.
///
/// Open-Meteo needs no credentials and the target location is a compile-time
/// constant, so there is no on-disk config file. The base URL is injectable
/// so tests can point the provider at a local mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of rendered forecast days (default: 7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: usize,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_forecast_days() -> usize {
    7
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl ForecastConfig {
    /// Default configuration with the base URL replaced, for test servers.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ForecastConfig::default();
        assert_eq!(cfg.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.forecast_days, 7);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: ForecastConfig = serde_json::from_str("{}").expect("empty object must parse");
        assert_eq!(cfg.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(cfg.forecast_days, 7);
    }

    #[test]
    fn with_base_url_overrides_only_the_url() {
        let cfg = ForecastConfig::with_base_url("http://127.0.0.1:8080");
        assert_eq!(cfg.base_url, "http://127.0.0.1:8080");
        assert_eq!(cfg.timeout_secs, 30);
    }
}
