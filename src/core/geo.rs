use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator projection constants
const EARTH_RADIUS: f64 = 6378137.0;
const MAX_LATITUDE: f64 = 85.0511287798;

/// Named coordinate reference systems understood by the map surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Projection {
    /// Geographic longitude/latitude, used by the routing API
    Epsg4326,
    /// Spherical Web Mercator, the map's native display system
    Epsg3857,
}

impl Projection {
    pub fn code(&self) -> &'static str {
        match self {
            Projection::Epsg4326 => "EPSG:4326",
            Projection::Epsg3857 => "EPSG:3857",
        }
    }

    /// Transforms an `[x, y]` coordinate between two projections.
    ///
    /// Geographic coordinates are ordered longitude first, matching GeoJSON.
    pub fn transform(coord: [f64; 2], from: Projection, to: Projection) -> [f64; 2] {
        match (from, to) {
            (Projection::Epsg4326, Projection::Epsg3857) => {
                let p = LatLng::new(coord[1], coord[0]).to_mercator();
                [p.x, p.y]
            }
            (Projection::Epsg3857, Projection::Epsg4326) => {
                let ll = LatLng::from_mercator(Point::new(coord[0], coord[1]));
                [ll.lng, ll.lat]
            }
            _ => coord,
        }
    }
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Clamps latitude to the range Web Mercator can represent
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// Converts to Web Mercator projection (EPSG:3857)
    pub fn to_mercator(&self) -> Point {
        let lat = Self::clamp_lat(self.lat);
        let x = self.lng.to_radians() * EARTH_RADIUS;
        let y = ((PI / 4.0 + lat.to_radians() / 2.0).tan().ln()) * EARTH_RADIUS;
        Point::new(x, y)
    }

    /// Creates LatLng from Web Mercator coordinates
    pub fn from_mercator(point: Point) -> Self {
        let lng = (point.x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
        Self::new(lat, lng)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in projected (EPSG:3857) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a tile coordinate in the slippy map tile system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Creates a tile coordinate from a LatLng and zoom level
    pub fn from_lat_lng(lat_lng: &LatLng, zoom: u8) -> Self {
        let lat_rad = LatLng::clamp_lat(lat_lng.lat).to_radians();
        let n = 2_f64.powi(zoom as i32);

        let x = ((lat_lng.lng + 180.0) / 360.0 * n).floor() as u32;
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor() as u32;

        Self::new(x, y, zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(52.3700, 4.9000);
        assert_eq!(coord.lat, 52.37);
        assert_eq!(coord.lng, 4.9);
    }

    #[test]
    fn test_mercator_origin() {
        let p = LatLng::new(0.0, 0.0).to_mercator();
        assert!(p.x.abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn test_transform_amsterdam() {
        let native = Projection::transform([4.9, 52.37], Projection::Epsg4326, Projection::Epsg3857);
        // Web Mercator position of central Amsterdam
        assert!((native[0] - 545_465.5).abs() < 1.0);
        assert!((native[1] - 6_867_304.7).abs() < 1.0);

        let back = Projection::transform(native, Projection::Epsg3857, Projection::Epsg4326);
        assert!((back[0] - 4.9).abs() < 1e-9);
        assert!((back[1] - 52.37).abs() < 1e-9);
    }

    #[test]
    fn test_transform_same_projection_is_identity() {
        let c = [1.5, 2.5];
        assert_eq!(Projection::transform(c, Projection::Epsg3857, Projection::Epsg3857), c);
    }

    #[test]
    fn test_tile_coord_conversion() {
        let tile = TileCoord::from_lat_lng(&LatLng::new(0.0, 0.0), 1);
        assert_eq!(tile, TileCoord::new(1, 1, 1));
    }
}
