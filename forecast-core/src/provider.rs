use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Coordinates, Forecast};

pub mod open_meteo;

pub use open_meteo::OpenMeteoProvider;

/// Ways a forecast fetch can fail. All of them surface to the user as a
/// single message string in the error view.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Transport-level failure: DNS, connection refused, timeout.
    #[error("{0}")]
    Network(String),

    /// The API answered with a non-success HTTP status.
    #[error("Failed to fetch weather data (HTTP {0})")]
    Status(u16),

    /// The body was not JSON, or the daily arrays violated the
    /// equal-length/ISO-date shape contract.
    #[error("Invalid forecast response: {0}")]
    Parse(String),
}

/// A source of multi-day forecasts for a fixed location.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_daily(&self, location: Coordinates) -> Result<Forecast, ForecastError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_code() {
        let msg = ForecastError::Status(500).to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("Failed to fetch"));
    }

    #[test]
    fn parse_error_carries_detail() {
        let msg = ForecastError::Parse("daily arrays have unequal lengths".into()).to_string();
        assert!(msg.contains("Invalid forecast response"));
        assert!(msg.contains("unequal lengths"));
    }

    #[test]
    fn network_error_passes_transport_message_through() {
        let msg = ForecastError::Network("connection refused".into()).to_string();
        assert_eq!(msg, "connection refused");
    }
}
