//! Handler for the `tabi weather` command.

use crate::commands::Out;
use crate::model::DayOption;
use crate::weather::{describe_code, fetch_forecast, DailyForecast, FUKUOKA_LAT, FUKUOKA_LON};
use crate::{trip, Result};
use std::fmt::Write as _;
use tracing::warn;

/// Shows the live Fukuoka forecast. When the fetch fails for any reason the
/// planned per-day forecast from the itinerary is shown instead; the static
/// display never blocks on the network.
pub async fn weather() -> Result<Out<Vec<DailyForecast>>> {
    match fetch_forecast(FUKUOKA_LAT, FUKUOKA_LON).await {
        Ok(forecast) => {
            let mut message = String::from("Fukuoka forecast (Open-Meteo):\n");
            for day in &forecast {
                let _ = writeln!(
                    message,
                    "  {}  {:<12} {:.0}°C / {:.0}°C",
                    day.date,
                    describe_code(day.code),
                    day.temp_max,
                    day.temp_min
                );
            }
            Ok(Out::new(message.trim_end().to_string(), forecast))
        }
        Err(e) => {
            warn!("Live forecast unavailable, showing the planned one: {e:#}");
            let mut message = String::from("Planned forecast (live data unavailable):\n");
            for day in trip::day_plans(DayOption::A) {
                let _ = writeln!(
                    message,
                    "  {} ({})  {} {}",
                    day.date,
                    day.weekday,
                    day.weather.symbol(),
                    day.weather_temp
                );
            }
            Ok(Out::new_message(message.trim_end().to_string()))
        }
    }
}
