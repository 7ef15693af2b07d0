//! Core library for the Zakopane forecast CLI.
//!
//! This crate defines:
//! - Client configuration for the Open-Meteo API
//! - The forecast provider abstraction and its Open-Meteo implementation
//! - Shared domain models (coordinates, daily forecasts)
//! - Presentation helpers (weather-code labels, localized dates) and the
//!   loading/error/success view renderer
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod format;
pub mod model;
pub mod provider;
pub mod view;

pub use config::ForecastConfig;
pub use model::{Coordinates, DailyForecast, Forecast, ZAKOPANE};
pub use provider::{ForecastError, ForecastProvider, OpenMeteoProvider};
pub use view::{FetchState, render};
