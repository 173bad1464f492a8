//! Plain-text rendering of the dashboard state.

use chrono::{DateTime, Local};
use dashboard_core::RefreshState;
use std::fmt::Write;

pub const TITLE: &str = "Current Weather and Time";

pub fn button_label(busy: bool) -> &'static str {
    if busy { "Updating..." } else { "Refresh data" }
}

/// Render the whole card. `checked_at` is when the last refresh settled, if any.
pub fn render(state: &RefreshState, checked_at: Option<DateTime<Local>>) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(TITLE.len()));

    if let Some(dt) = &state.date_time {
        let _ = writeln!(out, "{}", dt.date);
        let _ = writeln!(out, "{}", dt.time);
    }

    if let Some(weather) = &state.weather {
        let _ = writeln!(out, "Temperature: {}°C", weather.temperature_celsius);
        let _ = writeln!(out, "Wind: {} km/h", weather.windspeed_kmh);
        let _ = writeln!(out, "{}", weather.category());
    }

    if let Some(err) = &state.date_time_error {
        let _ = writeln!(out, "! date/time not updated: {err}");
    }
    if let Some(err) = &state.weather_error {
        let _ = writeln!(out, "! weather not updated: {err}");
    }

    if let Some(at) = checked_at {
        let _ = writeln!(out, "Checked at {}", at.format("%H:%M:%S"));
    }

    let _ = write!(out, "[{}]", button_label(state.busy));
    out
}
