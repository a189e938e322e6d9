use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};

/// A point of interest saved before the trip.
///
/// Spots are build-time content and never user-editable. The optional
/// `architect` attribution marks buildings on the architecture pilgrimage and
/// changes the proximity message when the device is within range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSpot {
    id: String,
    name: String,
    description: String,
    url: String,
    lat: f64,
    lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    architect: Option<String>,
}

impl SavedSpot {
    pub(crate) fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        lat: f64,
        lng: f64,
        architect: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            url: url.into(),
            lat,
            lng,
            architect: architect.map(str::to_string),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// An external map link for this spot.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }

    pub fn architect(&self) -> Option<&str> {
        self.architect.as_deref()
    }
}
