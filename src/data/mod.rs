pub mod geojson;

pub use geojson::{read_features, Feature, GeoJson, GeoJsonFeature, GeoJsonGeometry};
