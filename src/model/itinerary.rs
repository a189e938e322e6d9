//! Display types for the fixed trip schedule: day plans, flights and hotels.
//!
//! These are plain content structs with public fields. They are populated from
//! build-time constants in the `trip` module and are never persisted.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One day of the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub id: &'static str,
    /// Display date, e.g. `11/28`.
    pub date: &'static str,
    /// Weekday character, e.g. `五`.
    pub weekday: &'static str,
    /// The forecast penciled in when the trip was planned. Used as the
    /// fallback when the live forecast is unavailable.
    pub weather: WeatherKind,
    pub weather_temp: &'static str,
    pub activities: Vec<Activity>,
}

/// A single scheduled activity within a day plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: &'static str,
    /// Planned time slot, or a marker like `順遊` for optional side stops.
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub opening_hours: Option<&'static str>,
    pub guide_tips: Option<&'static str>,
    pub must_try: Vec<&'static str>,
    pub souvenirs: Vec<&'static str>,
    pub reservation_note: Option<&'static str>,
    pub location_url: Option<&'static str>,
    pub highlight: bool,
}

impl Activity {
    pub(crate) fn new(
        id: &'static str,
        time: &'static str,
        title: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            time,
            title,
            description,
            opening_hours: None,
            guide_tips: None,
            must_try: Vec::new(),
            souvenirs: Vec::new(),
            reservation_note: None,
            location_url: None,
            highlight: false,
        }
    }

    pub(crate) fn hours(mut self, hours: &'static str) -> Self {
        self.opening_hours = Some(hours);
        self
    }

    pub(crate) fn tips(mut self, tips: &'static str) -> Self {
        self.guide_tips = Some(tips);
        self
    }

    pub(crate) fn must_try(mut self, items: &[&'static str]) -> Self {
        self.must_try = items.to_vec();
        self
    }

    pub(crate) fn souvenirs(mut self, items: &[&'static str]) -> Self {
        self.souvenirs = items.to_vec();
        self
    }

    pub(crate) fn reservation(mut self, note: &'static str) -> Self {
        self.reservation_note = Some(note);
        self
    }

    pub(crate) fn map_link(mut self, url: &'static str) -> Self {
        self.location_url = Some(url);
        self
    }

    pub(crate) fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}

/// The planned weather for a day.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherKind {
    Sunny,
    Cloudy,
    Rainy,
}

serde_plain::derive_display_from_serialize!(WeatherKind);
serde_plain::derive_fromstr_from_deserialize!(WeatherKind);

impl WeatherKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherKind::Sunny => "☀",
            WeatherKind::Cloudy => "☁",
            WeatherKind::Rainy => "☂",
        }
    }
}

/// Which plan to follow on the flexible final day.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DayOption {
    /// Ohori Park and the art museum.
    #[default]
    A,
    /// The Futamigaura couple rocks in Itoshima.
    B,
}

serde_plain::derive_display_from_serialize!(DayOption);
serde_plain::derive_fromstr_from_deserialize!(DayOption);

/// Whether a flight is the outbound or the return leg.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightLeg {
    Outbound,
    Return,
}

impl FlightLeg {
    pub fn label(&self) -> &'static str {
        match self {
            FlightLeg::Outbound => "去程",
            FlightLeg::Return => "回程",
        }
    }
}

/// A booked flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightInfo {
    pub leg: FlightLeg,
    pub date: &'static str,
    pub code: &'static str,
    pub route: &'static str,
}

/// A booked hotel night.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelInfo {
    pub dates: &'static str,
    pub name: &'static str,
    pub area: &'static str,
    pub url: &'static str,
}

/// A preset polite-Japanese phrase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phrase {
    pub label: &'static str,
    pub zh: &'static str,
    pub ja: &'static str,
    pub romaji: &'static str,
}

/// An emergency contact number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub number: &'static str,
}
