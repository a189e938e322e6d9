//! Live daily forecast from the Open-Meteo API.
//!
//! Forecast data is best-effort: callers fall back to the static per-day
//! weather baked into the day plans whenever the fetch or the parse fails.

use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// The trip's anchor point for forecasts (central Fukuoka).
pub const FUKUOKA_LAT: f64 = 33.5902;
pub const FUKUOKA_LON: f64 = 130.4017;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// One day in the forecast, keyed by ISO date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecast {
    pub date: String,
    /// WMO weather interpretation code.
    pub code: i64,
    pub temp_max: f64,
    pub temp_min: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyBlock,
}

/// Open-Meteo returns the daily series as parallel arrays.
#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    weather_code: Vec<i64>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

/// Fetches the daily forecast for the given position in the trip's timezone.
pub async fn fetch_forecast(lat: f64, lon: f64) -> Result<Vec<DailyForecast>> {
    let client = reqwest::Client::new();
    let response = client
        .get(FORECAST_URL)
        .query(&[
            ("latitude", lat.to_string()),
            ("longitude", lon.to_string()),
            (
                "daily",
                "weather_code,temperature_2m_max,temperature_2m_min".to_string(),
            ),
            ("timezone", "Asia/Tokyo".to_string()),
        ])
        .send()
        .await
        .context("Failed to reach the Open-Meteo API")?;

    if !response.status().is_success() {
        anyhow::bail!(
            "Open-Meteo request failed with status {}",
            response.status()
        );
    }

    let body: ForecastResponse = response
        .json()
        .await
        .context("Failed to parse the Open-Meteo response")?;
    Ok(zip_daily(body.daily))
}

/// Zips the parallel daily arrays into per-day records. Days missing any of
/// the three series are dropped.
fn zip_daily(daily: DailyBlock) -> Vec<DailyForecast> {
    daily
        .time
        .into_iter()
        .enumerate()
        .filter_map(|(i, date)| {
            Some(DailyForecast {
                date,
                code: *daily.weather_code.get(i)?,
                temp_max: *daily.temperature_2m_max.get(i)?,
                temp_min: *daily.temperature_2m_min.get(i)?,
            })
        })
        .collect()
}

/// Human description for a WMO weather interpretation code.
pub fn describe_code(code: i64) -> &'static str {
    match code {
        0 => "clear",
        1..=3 => "cloudy",
        45 | 48 => "fog",
        51..=57 => "drizzle",
        61..=67 => "rain",
        71..=77 => "snow",
        80..=82 => "showers",
        85 | 86 => "snow showers",
        95..=99 => "thunderstorm",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "latitude": 33.6,
        "longitude": 130.4,
        "daily_units": { "time": "iso8601" },
        "daily": {
            "time": ["2025-11-28", "2025-11-29", "2025-11-30"],
            "weather_code": [3, 0, 61],
            "temperature_2m_max": [12.4, 14.1, 15.0],
            "temperature_2m_min": [6.0, 7.2, 9.8]
        }
    }"#;

    #[test]
    fn response_parses_into_per_day_records() {
        let response: ForecastResponse = serde_json::from_str(FIXTURE).unwrap();
        let forecast = zip_daily(response.daily);
        assert_eq!(forecast.len(), 3);
        assert_eq!(forecast[0].date, "2025-11-28");
        assert_eq!(forecast[0].code, 3);
        assert!((forecast[1].temp_max - 14.1).abs() < 1e-9);
        assert!((forecast[2].temp_min - 9.8).abs() < 1e-9);
    }

    #[test]
    fn ragged_arrays_drop_incomplete_days() {
        let daily = DailyBlock {
            time: vec!["2025-11-28".to_string(), "2025-11-29".to_string()],
            weather_code: vec![0],
            temperature_2m_max: vec![12.0, 13.0],
            temperature_2m_min: vec![5.0, 6.0],
        };
        let forecast = zip_daily(daily);
        assert_eq!(forecast.len(), 1);
        assert_eq!(forecast[0].date, "2025-11-28");
    }

    #[test]
    fn wmo_codes_map_to_descriptions() {
        assert_eq!(describe_code(0), "clear");
        assert_eq!(describe_code(2), "cloudy");
        assert_eq!(describe_code(63), "rain");
        assert_eq!(describe_code(95), "thunderstorm");
        assert_eq!(describe_code(42), "unknown");
    }
}
