//! Tri-state view rendering: one loading line, one error line, or the
//! title/subtitle/card grid for a successful fetch.

use std::fmt::Write;

use crate::format::{describe_weather, format_date};
use crate::model::Forecast;

/// Fetch lifecycle of the forecast. Exactly one variant is active; the state
/// starts at `Loading` and ends at `Error` or `Success` with no transitions
/// out (no refetch, no retry, no polling).
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Error(String),
    Success(Forecast),
}

/// Project a fetch state into its text view.
///
/// Pure function of the state: rendering the same state twice yields
/// byte-identical output. On success at most `days` cards are shown, fewer
/// if the forecast is shorter.
pub fn render(state: &FetchState, days: usize) -> String {
    match state {
        FetchState::Loading => "Ładowanie prognozy pogody...".to_string(),
        FetchState::Error(message) => format!("Błąd: {message}"),
        FetchState::Success(forecast) => render_cards(forecast, days),
    }
}

fn render_cards(forecast: &Forecast, days: usize) -> String {
    let mut out = String::new();
    out.push_str("🏔️ Pogoda w Zakopanem\n");
    out.push_str("Prognoza na najbliższy tydzień\n");

    for day in forecast.first_days(days) {
        out.push('\n');
        let _ = writeln!(out, "{}", format_date(day.date));
        let _ = writeln!(out, "{}", describe_weather(day.weather_code));
        let _ = writeln!(
            out,
            "{} / {}",
            format_temperature(day.temperature_max),
            format_temperature(day.temperature_min)
        );
        // Native float formatting, no precision control.
        let _ = writeln!(out, "💧 {} mm", day.precipitation_sum);
    }

    out
}

/// Rounding rule for displayed temperatures, pinned to half-to-even.
fn format_temperature(celsius: f64) -> String {
    format!("{}°C", celsius.round_ties_even() as i64)
}
