//! Observed slick outlines from GeoJSON.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use skua_grid::geom::Ring;
use skua_score::Observation;

use crate::error::IoError;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: serde_json::Map<String, serde_json::Value>,
    geometry: Geometry,
}

/// Geometry kept untyped so unsupported kinds report cleanly instead of
/// failing inside the deserializer.
#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: serde_json::Value,
}

type Position = Vec<f64>;

fn ring_from_positions(positions: Vec<Position>) -> Result<Ring, IoError> {
    let mut points = Vec::with_capacity(positions.len());
    for pos in positions {
        if pos.len() < 2 {
            return Err(IoError::Json {
                reason: format!("position with {} coordinates, expected at least 2", pos.len()),
            });
        }
        points.push((pos[0], pos[1]));
    }
    Ok(Ring::new(points))
}

/// Exterior rings of a polygon-family geometry. Interior rings (holes) are
/// dropped; the observed outline is the hull the simulator is compared to.
fn exterior_rings(geometry: &Geometry) -> Result<Vec<Ring>, IoError> {
    match geometry.kind.as_str() {
        "Polygon" => {
            let polygon: Vec<Vec<Position>> = serde_json::from_value(geometry.coordinates.clone())?;
            polygon
                .into_iter()
                .take(1)
                .map(ring_from_positions)
                .collect()
        }
        "MultiPolygon" => {
            let polygons: Vec<Vec<Vec<Position>>> =
                serde_json::from_value(geometry.coordinates.clone())?;
            polygons
                .into_iter()
                .filter_map(|p| p.into_iter().next())
                .map(ring_from_positions)
                .collect()
        }
        other => Err(IoError::UnsupportedGeometry {
            kind: other.to_string(),
        }),
    }
}

/// Parses an observation product from GeoJSON text.
///
/// Exterior rings of every feature are pooled into one observation; the
/// acquisition time comes from the first `IDENTIFIER` property found.
///
/// # Errors
///
/// Returns [`IoError::MissingIdentifier`] when no feature carries an
/// `IDENTIFIER`, [`IoError::UnsupportedGeometry`] for non-polygon
/// geometries, and [`IoError::Time`] when the identifier's timestamp does
/// not parse.
pub fn parse_observation(json: &str) -> Result<Observation, IoError> {
    let collection: FeatureCollection = serde_json::from_str(json)?;

    let mut identifier: Option<String> = None;
    let mut rings = Vec::new();
    for feature in &collection.features {
        if identifier.is_none() {
            identifier = feature
                .properties
                .get("IDENTIFIER")
                .and_then(|v| v.as_str())
                .map(str::to_string);
        }
        rings.extend(exterior_rings(&feature.geometry)?);
    }

    let id = identifier.ok_or(IoError::MissingIdentifier)?;
    debug!(id = %id, rings = rings.len(), "parsed observation");
    Ok(Observation::from_identifier(id, rings)?)
}

/// Reads an observation product from a GeoJSON file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] for a missing path and propagates
/// [`parse_observation`] failures.
pub fn read_observation(path: &Path) -> Result<Observation, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let json = std::fs::read_to_string(path)?;
    parse_observation(&json)
}
