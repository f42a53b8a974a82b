//! Core data models for the lodging collector.

pub mod place;
pub mod record;

pub use place::{BoundingBox, Geometry, GridPoint, LatLng, PlaceDetail, RawPlace};
pub use record::AccommodationRecord;
