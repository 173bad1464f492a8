//! WMO weather interpretation codes, reduced to the handful of categories the
//! dashboard can describe.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCategory {
    ClearSky,
    PartlyCloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    RainShowers,
    Unknown,
}

impl WeatherCategory {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => WeatherCategory::ClearSky,
            1..=3 => WeatherCategory::PartlyCloudy,
            45 | 48 => WeatherCategory::Fog,
            51 | 53 | 55 => WeatherCategory::Drizzle,
            61 | 63 | 65 => WeatherCategory::Rain,
            71 | 73 | 75 => WeatherCategory::Snow,
            80..=82 => WeatherCategory::RainShowers,
            _ => WeatherCategory::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCategory::ClearSky => "Clear sky",
            WeatherCategory::PartlyCloudy => "Partly cloudy",
            WeatherCategory::Fog => "Fog",
            WeatherCategory::Drizzle => "Drizzle",
            WeatherCategory::Rain => "Rain",
            WeatherCategory::Snow => "Snow",
            WeatherCategory::RainShowers => "Rain showers",
            WeatherCategory::Unknown => "Unknown weather",
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Human-readable description for a weather code. Total over all codes.
pub fn classify(code: i64) -> &'static str {
    WeatherCategory::from_code(code).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_their_category() {
        let table: &[(&[i64], &str)] = &[
            (&[0], "Clear sky"),
            (&[1, 2, 3], "Partly cloudy"),
            (&[45, 48], "Fog"),
            (&[51, 53, 55], "Drizzle"),
            (&[61, 63, 65], "Rain"),
            (&[71, 73, 75], "Snow"),
            (&[80, 81, 82], "Rain showers"),
        ];

        for (codes, expected) in table {
            for code in *codes {
                assert_eq!(classify(*code), *expected, "code {code}");
            }
        }
    }

    #[test]
    fn spot_checks() {
        assert_eq!(classify(2), "Partly cloudy");
        assert_eq!(classify(61), "Rain");
        assert_eq!(classify(0), "Clear sky");
    }

    #[test]
    fn unlisted_codes_are_unknown() {
        for code in [-1, 4, 44, 46, 47, 49, 52, 56, 62, 66, 72, 77, 79, 83, 95, 99, i64::MIN, i64::MAX]
        {
            assert_eq!(classify(code), "Unknown weather", "code {code}");
        }
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(WeatherCategory::from_code(81).to_string(), "Rain showers");
    }
}
