//! Grid sweep driver.
//!
//! Visits every grid point and category, enriches each search result with its
//! details and keeps the ones that pass [`is_relevant`]. Places found from
//! several points or categories are kept every time they are seen.

use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::filter::is_relevant;
use crate::grid::Grid;
use crate::models::{AccommodationRecord, GridPoint};
use crate::places::PlaceSource;

pub struct Collector<'a, S> {
    source: &'a S,
    categories: &'a [String],
    radius_m: u32,
    progress: Option<ProgressBar>,
}

impl<'a, S: PlaceSource> Collector<'a, S> {
    pub fn new(source: &'a S, categories: &'a [String], radius_m: u32) -> Self {
        Self {
            source,
            categories,
            radius_m,
            progress: None,
        }
    }

    /// Tick `progress` once per finished grid point
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Sweep the whole grid and return accepted records in discovery order.
    pub async fn collect(&self, grid: &Grid) -> Vec<AccommodationRecord> {
        let mut records = Vec::new();

        for point in grid {
            for category in self.categories {
                info!("Collecting {} at {}", category, point);
                let found = self.collect_at(point, category, &mut records).await;
                debug!("Accepted {} {} places at {}", found, category, point);
            }
            if let Some(pb) = &self.progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = &self.progress {
            pb.finish_with_message("Sweep complete");
        }
        info!("Collected {} records", records.len());
        records
    }

    /// One point and category; returns how many records were appended
    async fn collect_at(
        &self,
        point: GridPoint,
        category: &str,
        records: &mut Vec<AccommodationRecord>,
    ) -> usize {
        let places = self
            .source
            .nearby_search(point, self.radius_m, category)
            .await;

        let mut accepted = 0;
        for place in &places {
            let Some(detail) = self.source.place_details(&place.place_id).await else {
                continue;
            };

            if is_relevant(&place.name, &detail.types) {
                records.push(AccommodationRecord::from_parts(place, &detail));
                accepted += 1;
            } else {
                debug!("Skipping {} ({}): not lodging", place.name, place.place_id);
            }
        }
        accepted
    }
}
