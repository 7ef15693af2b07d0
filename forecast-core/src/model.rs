use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fixed geographic point. Not user-supplied anywhere in this app.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Zakopane, Poland.
pub const ZAKOPANE: Coordinates = Coordinates {
    latitude: 49.2992,
    longitude: 19.9496,
};

/// One day of the forecast, index-aligned columns from the API response
/// collapsed into a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// WMO weather code.
    pub weather_code: u16,
    /// Maximum temperature in Celsius.
    pub temperature_max: f64,
    /// Minimum temperature in Celsius.
    pub temperature_min: f64,
    /// Total precipitation in millimeters.
    pub precipitation_sum: f64,
}

/// Validated multi-day forecast, built once at the fetch boundary and
/// replaced wholesale on each fetch, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub days: Vec<DailyForecast>,
}

impl Forecast {
    /// The first `n` days, or fewer if the response was shorter.
    pub fn first_days(&self, n: usize) -> &[DailyForecast] {
        &self.days[..n.min(self.days.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> DailyForecast {
        DailyForecast {
            date: NaiveDate::from_ymd_opt(2024, 1, d).expect("valid date"),
            weather_code: 0,
            temperature_max: 1.0,
            temperature_min: -1.0,
            precipitation_sum: 0.0,
        }
    }

    #[test]
    fn first_days_caps_at_available_length() {
        let forecast = Forecast {
            days: (1..=3).map(day).collect(),
        };

        assert_eq!(forecast.first_days(7).len(), 3);
        assert_eq!(forecast.first_days(2).len(), 2);
        assert_eq!(forecast.first_days(0).len(), 0);
    }

    #[test]
    fn first_days_preserves_order() {
        let forecast = Forecast {
            days: (1..=10).map(day).collect(),
        };

        let week = forecast.first_days(7);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(week[6].date, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
    }
}
