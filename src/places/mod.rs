//! Google Places web service access.

mod client;
mod response;

pub use client::{PlacesClient, DETAIL_FIELDS};

use crate::models::{GridPoint, PlaceDetail, RawPlace};

/// Where the collector gets places from.
///
/// Both operations absorb their own failures: a failed search yields whatever
/// was gathered before the failure, and a failed details lookup yields `None`.
#[allow(async_fn_in_trait)]
pub trait PlaceSource {
    /// All results around `point` for one category, across every page
    async fn nearby_search(&self, point: GridPoint, radius_m: u32, category: &str)
        -> Vec<RawPlace>;

    async fn place_details(&self, place_id: &str) -> Option<PlaceDetail>;
}
