//! Sample-point grid over a bounding box.
//!
//! Points are produced row by row: latitude ascending from `south`, and within
//! each row longitude ascending from `west`. Coordinates are advanced by
//! repeated addition of the step, so the last row or column may be dropped or
//! land slightly inside the bound due to floating-point drift.

use crate::error::ConfigError;
use crate::models::{BoundingBox, GridPoint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    bbox: BoundingBox,
    step: f64,
}

impl Grid {
    pub fn new(bbox: BoundingBox, step: f64) -> Result<Self, ConfigError> {
        bbox.validate()?;
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "grid step must be a positive number, got {}",
                step
            )));
        }
        // Accumulation stalls once step falls below half an ulp of the coordinate
        let bounds = [bbox.south, bbox.north, bbox.west, bbox.east];
        if let Some(stuck) = bounds.iter().find(|&&b| b + step == b) {
            return Err(ConfigError::invalid(format!(
                "grid step {} is too small to advance past {}",
                step, stuck
            )));
        }
        Ok(Self { bbox, step })
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Start a fresh pass over the grid
    pub fn points(&self) -> GridPoints {
        GridPoints {
            bbox: self.bbox,
            step: self.step,
            lat: self.bbox.south,
            lng: self.bbox.west,
        }
    }

    /// Number of points a full pass yields
    pub fn len_hint(&self) -> u64 {
        self.points().count() as u64
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = GridPoint;
    type IntoIter = GridPoints;

    fn into_iter(self) -> Self::IntoIter {
        self.points()
    }
}

/// Lazy iterator returned by [`Grid::points`].
#[derive(Debug, Clone)]
pub struct GridPoints {
    bbox: BoundingBox,
    step: f64,
    lat: f64,
    lng: f64,
}

impl Iterator for GridPoints {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        if self.lng > self.bbox.east {
            self.lat += self.step;
            self.lng = self.bbox.west;
        }
        if self.lat > self.bbox.north {
            return None;
        }

        let point = GridPoint::new(self.lat, self.lng);
        self.lng += self.step;
        Some(point)
    }
}

impl std::iter::FusedIterator for GridPoints {}
