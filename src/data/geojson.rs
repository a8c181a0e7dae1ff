//! GeoJSON reading with reprojection
//!
//! Routing responses arrive as GeoJSON in geographic coordinates. They are
//! parsed into the serde types below and then read into [`Feature`]s whose
//! `geo-types` geometries live in the map's native projection.

use crate::core::geo::Projection;
use crate::{MapError, Result};
use geo_types::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A GeoJSON position; only the first two ordinates are used
pub type Position = Vec<f64>;

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureCollectionKind {
    FeatureCollection,
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeatureCollection {
    #[serde(rename = "type")]
    pub kind: FeatureCollectionKind,
    pub features: Vec<GeoJsonFeature>,
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeoJson {
    FeatureCollection(GeoJsonFeatureCollection),
    Feature(GeoJsonFeature),
    Geometry(GeoJsonGeometry),
}

impl GeoJson {
    pub fn from_value(value: &Value) -> Result<Self> {
        GeoJson::deserialize(value)
            .map_err(|e| MapError::ParseError(format!("Invalid GeoJSON: {}", e)))
    }
}

/// A feature read into the map's native projection
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: Option<Value>,
    pub geometry: Geometry<f64>,
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn new(geometry: Geometry<f64>) -> Self {
        Self {
            id: None,
            geometry,
            properties: Map::new(),
        }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

/// Reads every feature in `value`, reprojecting from `data_projection`
/// into `feature_projection`. Features without geometry are skipped.
pub fn read_features(
    value: &Value,
    data_projection: Projection,
    feature_projection: Projection,
) -> Result<Vec<Feature>> {
    let raw = match GeoJson::from_value(value)? {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(geometry) => {
            let geometry = geometry.to_geometry(data_projection, feature_projection)?;
            return Ok(vec![Feature::new(geometry)]);
        }
    };

    let mut features = Vec::with_capacity(raw.len());
    for feature in raw {
        let Some(geometry) = feature.geometry else {
            log::debug!("skipping GeoJSON feature {:?} without geometry", feature.id);
            continue;
        };
        features.push(Feature {
            id: feature.id,
            geometry: geometry.to_geometry(data_projection, feature_projection)?,
            properties: feature.properties.unwrap_or_default(),
        });
    }
    Ok(features)
}

impl GeoJsonGeometry {
    /// Converts to a `geo-types` geometry, reprojecting every position.
    pub fn to_geometry(&self, from: Projection, to: Projection) -> Result<Geometry<f64>> {
        let coord = |p: &Position| position_to_coord(p, from, to);
        let line = |ps: &Vec<Position>| -> Result<LineString<f64>> {
            Ok(LineString::new(ps.iter().map(coord).collect::<Result<Vec<_>>>()?))
        };
        let polygon = |rings: &Vec<Vec<Position>>| -> Result<Polygon<f64>> {
            let mut rings = rings.iter();
            let exterior = match rings.next() {
                Some(ring) => line(ring)?,
                None => LineString::new(Vec::new()),
            };
            let interiors = rings.map(|r| line(r)).collect::<Result<Vec<_>>>()?;
            Ok(Polygon::new(exterior, interiors))
        };

        let geometry = match self {
            GeoJsonGeometry::Point { coordinates } => Geometry::Point(Point(coord(coordinates)?)),
            GeoJsonGeometry::LineString { coordinates } => Geometry::LineString(line(coordinates)?),
            GeoJsonGeometry::Polygon { coordinates } => Geometry::Polygon(polygon(coordinates)?),
            GeoJsonGeometry::MultiPoint { coordinates } => Geometry::MultiPoint(MultiPoint::new(
                coordinates
                    .iter()
                    .map(|p| coord(p).map(Point))
                    .collect::<Result<Vec<_>>>()?,
            )),
            GeoJsonGeometry::MultiLineString { coordinates } => {
                Geometry::MultiLineString(MultiLineString::new(
                    coordinates
                        .iter()
                        .map(|l| line(l))
                        .collect::<Result<Vec<_>>>()?,
                ))
            }
            GeoJsonGeometry::MultiPolygon { coordinates } => {
                Geometry::MultiPolygon(MultiPolygon::new(
                    coordinates
                        .iter()
                        .map(|p| polygon(p))
                        .collect::<Result<Vec<_>>>()?,
                ))
            }
            GeoJsonGeometry::GeometryCollection { geometries } => {
                Geometry::GeometryCollection(GeometryCollection(
                    geometries
                        .iter()
                        .map(|g| g.to_geometry(from, to))
                        .collect::<Result<Vec<_>>>()?,
                ))
            }
        };
        Ok(geometry)
    }
}

fn position_to_coord(position: &Position, from: Projection, to: Projection) -> Result<Coord<f64>> {
    match position.as_slice() {
        [x, y, ..] => {
            let [x, y] = Projection::transform([*x, *y], from, to);
            Ok(Coord { x, y })
        }
        _ => Err(MapError::ParseError(format!(
            "GeoJSON position needs at least two ordinates, got {}",
            position.len()
        ))),
    }
}
