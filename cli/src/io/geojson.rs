//! GeoJSON reading for cell outlines and active regions.

use std::{fs, path::Path};

use anyhow::{bail, ensure, Context, Result};
use cellpick::{Point, Polygon};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One outline read from a FeatureCollection, with its optional label.
#[derive(Debug, Clone)]
pub(crate) struct Feature {
    pub(crate) polygon: Polygon,
    pub(crate) label: Option<String>,
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    geometry: Option<Geometry>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
}

/// Read a GeoJSON FeatureCollection of Polygon/MultiPolygon features from `path`.
pub(crate) fn read_features(path: &Path, label_property: &str, scale: f64) -> Result<Vec<Feature>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("[io::geojson] Failed to read GeoJSON file: {}", path.display()))?;
    parse_features(&data, label_property, scale)
        .with_context(|| format!("[io::geojson] Failed to parse {}", path.display()))
}

/// Parse a GeoJSON FeatureCollection, multiplying coordinates by `scale`.
///
/// Only the exterior ring is used; a MultiPolygon contributes its first polygon.
/// Feature `label_property` (string or number) becomes the feature label.
pub(crate) fn parse_features(data: &str, label_property: &str, scale: f64) -> Result<Vec<Feature>> {
    ensure!(scale.is_finite() && scale > 0.0, "[io::geojson] Scale must be positive, got {scale}");

    let collection: FeatureCollection = serde_json::from_str(data)
        .context("[io::geojson] Expected a FeatureCollection of polygons")?;

    collection.features.into_iter().enumerate()
        .map(|(idx, feature)| {
            let ring = match feature.geometry {
                Some(Geometry::Polygon { coordinates }) => coordinates.into_iter().next(),
                Some(Geometry::MultiPolygon { coordinates }) => {
                    coordinates.into_iter().next().and_then(|rings| rings.into_iter().next())
                }
                None => bail!("[io::geojson] Feature {idx} has no geometry"),
            };
            let Some(ring) = ring else { bail!("[io::geojson] Feature {idx} has an empty geometry") };

            let points = ring.iter()
                .map(|position| match position.as_slice() {
                    [x, y, ..] => Ok(Point { x: x * scale, y: y * scale }),
                    _ => bail!("[io::geojson] Feature {idx} has a position with fewer than two coordinates"),
                })
                .collect::<Result<Vec<_>>>()?;
            let polygon = Polygon::new(points)
                .with_context(|| format!("[io::geojson] Feature {idx} is not a valid cell outline"))?;

            let label = feature.properties.as_ref()
                .and_then(|properties| properties.get(label_property))
                .and_then(|value| match value {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                });

            Ok(Feature { polygon, label })
        })
        .collect()
}
