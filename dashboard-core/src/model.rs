use crate::classify::WeatherCategory;

/// Geographic point the weather is requested for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const SAO_PAULO: Coordinates = Coordinates { latitude: -23.5505, longitude: -46.6333 };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::SAO_PAULO
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeSnapshot {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature_celsius: f64,
    pub windspeed_kmh: f64,
    pub weather_code: i64,
}

impl WeatherSnapshot {
    pub fn category(&self) -> WeatherCategory {
        WeatherCategory::from_code(self.weather_code)
    }
}

/// Everything the presentation layer needs to draw the dashboard.
///
/// Snapshots are only ever replaced whole by a successful fetch. A failed
/// fetch keeps the previous snapshot and records its message in the matching
/// `*_error` field until that source succeeds again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshState {
    pub date_time: Option<DateTimeSnapshot>,
    pub weather: Option<WeatherSnapshot>,
    pub busy: bool,
    pub date_time_error: Option<String>,
    pub weather_error: Option<String>,
}
