//! Places API shapes and the geographic primitives used to sweep an area.

use serde::Deserialize;

use crate::error::ConfigError;

/// Rectangular search area in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Result<Self, ConfigError> {
        let bbox = Self {
            north,
            south,
            east,
            west,
        };
        bbox.validate()?;
        Ok(bbox)
    }

    /// Check `north > south` and `east > west`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [self.north, self.south, self.east, self.west]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::invalid("bounding box bounds must be finite"));
        }
        if self.north <= self.south {
            return Err(ConfigError::invalid(format!(
                "bounding box north ({}) must be greater than south ({})",
                self.north, self.south
            )));
        }
        if self.east <= self.west {
            return Err(ConfigError::invalid(format!(
                "bounding box east ({}) must be greater than west ({})",
                self.east, self.west
            )));
        }
        Ok(())
    }

    pub fn contains_lat(&self, lat: f64) -> bool {
        lat >= self.south && lat <= self.north
    }

    pub fn contains_lng(&self, lng: f64) -> bool {
        lng >= self.west && lng <= self.east
    }
}

impl Default for BoundingBox {
    /// Lviv urban territorial community.
    fn default() -> Self {
        Self {
            north: 49.940,
            south: 49.740,
            east: 24.180,
            west: 23.870,
        }
    }
}

/// A single sample point of the search grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GridPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Renders as the `location` query value, `"lat,lng"`.
impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// One element of a Nearby Search `results` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPlace {
    pub place_id: String,

    #[serde(default)]
    pub name: String,

    /// Approximate address
    #[serde(default)]
    pub vicinity: Option<String>,

    pub geometry: Geometry,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub types: Vec<String>,
}

/// The subset of Place Details kept for each candidate.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlaceDetail {
    #[serde(rename = "formatted_phone_number", default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub types: Vec<String>,
}
