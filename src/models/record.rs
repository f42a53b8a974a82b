//! Output row produced for every accepted lodging.

use super::place::{PlaceDetail, RawPlace};

/// Merged search result and details, in output column order.
#[derive(Debug, Clone, PartialEq)]
pub struct AccommodationRecord {
    pub name: String,

    /// Nearby Search `vicinity`
    pub address: Option<String>,

    pub latitude: f64,
    pub longitude: f64,
    pub rating: Option<f64>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub place_id: String,
}

impl AccommodationRecord {
    /// Combine a search result with its details lookup
    pub fn from_parts(place: &RawPlace, detail: &PlaceDetail) -> Self {
        Self {
            name: place.name.clone(),
            address: place.vicinity.clone(),
            latitude: place.geometry.location.lat,
            longitude: place.geometry.location.lng,
            rating: place.rating,
            phone: detail.phone.clone(),
            website: detail.website.clone(),
            place_id: place.place_id.clone(),
        }
    }

    /// Cells in column order; absent values become empty strings.
    pub fn to_row(&self) -> [String; 8] {
        [
            self.name.clone(),
            self.address.clone().unwrap_or_default(),
            self.latitude.to_string(),
            self.longitude.to_string(),
            self.rating.map(|r| r.to_string()).unwrap_or_default(),
            self.phone.clone().unwrap_or_default(),
            self.website.clone().unwrap_or_default(),
            self.place_id.clone(),
        ]
    }
}
