//! Great-circle distance math and the saved-spot proximity checker.

use crate::model::SavedSpot;
use crate::Error;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distances under this are classified as "approaching".
pub const NEARBY_THRESHOLD_KM: f64 = 2.0;

/// A position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    /// Parses a `lat,lon` pair, e.g. `33.5902,130.4017`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| anyhow::anyhow!("Expected 'lat,lon', got '{s}'"))?;
        Ok(Self {
            lat: lat
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid latitude '{lat}'"))?,
            lon: lon
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid longitude '{lon}'"))?,
        })
    }
}

/// Great-circle distance between two positions in kilometers, via the
/// haversine formula.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Why a position could not be obtained. The two cases produce different
/// user-facing messages and neither is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// No location capability is available in this environment.
    Unsupported,
    /// The request failed or was denied.
    Failed(String),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::Unsupported => write!(f, "location is not supported here"),
            LocationError::Failed(reason) => write!(f, "location request failed: {reason}"),
        }
    }
}

impl std::error::Error for LocationError {}

/// The platform location capability: an asynchronous, fallible position fix.
#[async_trait]
pub trait LocationProvider {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Position resolved from `--lat`/`--lon` flags or the `TABI_POSITION`
/// environment variable (`lat,lon`).
///
/// No flags and no variable means the capability is absent (`Unsupported`);
/// half a coordinate pair or an unparseable variable is a failed request.
#[derive(Debug, Clone)]
pub struct CliLocation {
    resolved: Result<Coordinates, LocationError>,
}

impl CliLocation {
    pub const POSITION_ENV: &'static str = "TABI_POSITION";

    pub fn detect(lat: Option<f64>, lon: Option<f64>) -> Self {
        let resolved = match (lat, lon) {
            (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
            (None, None) => match std::env::var(Self::POSITION_ENV) {
                Ok(raw) => raw
                    .parse()
                    .map_err(|e: Error| LocationError::Failed(e.to_string())),
                Err(_) => Err(LocationError::Unsupported),
            },
            _ => Err(LocationError::Failed(
                "both --lat and --lon are required".to_string(),
            )),
        };
        Self { resolved }
    }
}

#[async_trait]
impl LocationProvider for CliLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        self.resolved.clone()
    }
}

/// Classifies a distance to a spot into its user-facing message. The distance
/// is always shown rounded to one decimal place.
pub fn proximity_message(spot: &SavedSpot, distance_km: f64) -> String {
    if distance_km < NEARBY_THRESHOLD_KM {
        match spot.architect() {
            Some(architect) => format!(
                "📍 Architecture alert! You are near a work by {architect} ({distance_km:.1} km)"
            ),
            None => format!("Almost there! About {distance_km:.1} km to go"),
        }
    } else {
        format!("About {distance_km:.1} km away")
    }
}

/// Runs proximity checks and retains the latest result per spot.
///
/// A spot is marked as checking while its request is outstanding, which
/// blocks a repeat trigger for the same spot; the mark is cleared
/// unconditionally when the request settles. Checks for different spots are
/// independent and each writes only its own keyed slot.
#[derive(Debug, Default)]
pub struct ProximityChecker {
    messages: BTreeMap<String, String>,
    checking: BTreeSet<String>,
}

impl ProximityChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks how far the device is from `spot` and returns the resulting
    /// message. Every failure mode maps to a message as well; this never
    /// returns an error.
    pub async fn check<P>(&mut self, spot: &SavedSpot, provider: &P) -> String
    where
        P: LocationProvider + Sync,
    {
        if !self.checking.insert(spot.id().to_string()) {
            return "A location check for this spot is already in progress".to_string();
        }
        self.messages.remove(spot.id());

        let message = match provider.current_position().await {
            Ok(position) => {
                let distance = haversine_km(position, spot.coordinates());
                proximity_message(spot, distance)
            }
            Err(LocationError::Unsupported) => format!(
                "No location source is available. Pass --lat/--lon or set {}.",
                CliLocation::POSITION_ENV
            ),
            Err(LocationError::Failed(reason)) => {
                format!("Could not determine the current position: {reason}")
            }
        };

        self.checking.remove(spot.id());
        self.messages
            .insert(spot.id().to_string(), message.clone());
        message
    }

    /// The last message produced for a spot, if any.
    pub fn message_for(&self, spot_id: &str) -> Option<&str> {
        self.messages.get(spot_id).map(String::as_str)
    }

    pub fn is_checking(&self, spot_id: &str) -> bool {
        self.checking.contains(spot_id)
    }
}
