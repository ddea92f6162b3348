//! Geographic bounding boxes in degrees.

use crate::error::GridError;
use crate::geom::Ring;

/// Axis-aligned geographic extent in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Western bound.
    pub lon_min: f64,
    /// Southern bound.
    pub lat_min: f64,
    /// Eastern bound.
    pub lon_max: f64,
    /// Northern bound.
    pub lat_max: f64,
}

impl BoundingBox {
    /// Creates a bounding box from explicit bounds. No validation happens
    /// here; [`crate::Grid::build`] rejects degenerate extents.
    pub fn new(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> Self {
        Self {
            lon_min,
            lat_min,
            lon_max,
            lat_max,
        }
    }

    /// Tight extent of a set of points, ignoring non-finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyPointSet`] if no finite point remains.
    pub fn from_points<I>(points: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut bounds: Option<BoundingBox> = None;
        for (lon, lat) in points {
            if !lon.is_finite() || !lat.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                None => BoundingBox::new(lon, lat, lon, lat),
                Some(b) => BoundingBox::new(
                    b.lon_min.min(lon),
                    b.lat_min.min(lat),
                    b.lon_max.max(lon),
                    b.lat_max.max(lat),
                ),
            });
        }
        bounds.ok_or(GridError::EmptyPointSet)
    }

    /// Tight extent of a set of polygon rings.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyPointSet`] if the rings hold no finite
    /// vertex.
    pub fn from_rings(rings: &[Ring]) -> Result<Self, GridError> {
        Self::from_points(rings.iter().flat_map(|r| r.points().iter().copied()))
    }

    /// Componentwise union: each bound of the result is only ever widened,
    /// never narrowed, with respect to `self`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.lon_min.min(other.lon_min),
            self.lat_min.min(other.lat_min),
            self.lon_max.max(other.lon_max),
            self.lat_max.max(other.lat_max),
        )
    }

    /// True if `(lon, lat)` lies inside or on the boundary.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.lon_min && lon <= self.lon_max && lat >= self.lat_min && lat <= self.lat_max
    }

    /// True if the two boxes share any point (boundary contact counts).
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.lon_min <= other.lon_max
            && other.lon_min <= self.lon_max
            && self.lat_min <= other.lat_max
            && other.lat_min <= self.lat_max
    }
}
