//! Presentation helpers: WMO code labels and Polish date formatting.

use chrono::{Datelike, NaiveDate};

/// Polish weekday names, Sunday-first.
const WEEKDAYS: [&str; 7] = [
    "Niedziela",
    "Poniedziałek",
    "Wtorek",
    "Środa",
    "Czwartek",
    "Piątek",
    "Sobota",
];

/// Map a WMO weather code to its Polish label with emoji.
///
/// Pure and total: unknown codes fall back to "Brak danych".
pub const fn describe_weather(code: u16) -> &'static str {
    match code {
        0 => "☀️ Słonecznie",
        1 => "🌤️ Pogodnie",
        2 => "⛅ Częściowo pochmurno",
        3 => "☁️ Pochmurno",
        45 => "🌫️ Mgła",
        48 => "🌫️ Mgła mroźna",
        51 => "🌧️ Lekka mżawka",
        53 => "🌧️ Mżawka",
        55 => "🌧️ Silna mżawka",
        61 => "🌧️ Lekki deszcz",
        63 => "🌧️ Deszcz",
        65 => "🌧️ Silny deszcz",
        71 => "🌨️ Lekki śnieg",
        73 => "🌨️ Śnieg",
        75 => "🌨️ Silny śnieg",
        77 => "🌨️ Śnieg ziarnisty",
        80 | 81 => "🌦️ Przelotne opady",
        82 => "⛈️ Silne przelotne opady",
        85 => "🌨️ Przelotne śniegi",
        86 => "🌨️ Silne przelotne śniegi",
        95 => "⛈️ Burza",
        96 => "⛈️ Burza z gradem",
        99 => "⛈️ Silna burza z gradem",
        _ => "🌡️ Brak danych",
    }
}

/// Format a date as `"<Weekday>, <day>.<month>"`, e.g. "Poniedziałek, 15.1".
///
/// Day and month are unpadded; the month is 1-indexed. Malformed input never
/// reaches this function: ISO date strings are parsed and rejected at the
/// fetch boundary.
pub fn format_date(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!("{weekday}, {}.{}", date.day(), date.month())
}
