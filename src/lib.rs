//! Lodgegrid - a grid-sweeping lodging collector for the Google Places API
//!
//! This library provides the grid, Places client, filter and output modules
//! used by the `collect` binary.

pub mod collector;
pub mod config;
pub mod error;
pub mod filter;
pub mod grid;
pub mod models;
pub mod output;
pub mod places;

pub use collector::Collector;
pub use config::Config;
pub use grid::Grid;
pub use models::{AccommodationRecord, BoundingBox, GridPoint, PlaceDetail, RawPlace};
pub use places::{PlaceSource, PlacesClient};
