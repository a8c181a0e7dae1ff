//! Engine-wide constants for the isochrone tool.
//! Keeping them in a single place makes it easier to tweak magic numbers.

use crate::layers::vector::Color;

/// Layer name shared by every isochrone overlay of a run.
pub const ISOCHRONE_LAYER_NAME: &str = "isochrone";

/// Layer name reserved for the start point marker.
pub const START_POINT_LAYER_NAME: &str = "isochroneStartPoint";

/// Title shown for the start point marker layer.
pub const START_POINT_TITLE: &str = "Starting point";

/// Z-index of the start point marker, above basemap and overlays.
pub const START_POINT_Z_INDEX: i32 = 10;

/// Radius in pixels of the start point circle.
pub const START_POINT_RADIUS: f32 = 3.0;

/// Decimal places written into the coordinate fields after a pick.
pub const PICKED_COORD_PRECISION: usize = 4;

/// Decimal places shown by the mouse position control.
pub const MOUSE_POSITION_PRECISION: usize = 3;

/// Most contours a single run may request; one per palette entry.
pub const MAX_CONTOURS: usize = 9;

/// Overlay fill colours, ranked by dispatch position.
pub const PALETTE: [Color; MAX_CONTOURS] = [
    Color::rgba(43, 131, 186, 0.5),
    Color::rgba(100, 171, 176, 0.5),
    Color::rgba(157, 211, 167, 0.5),
    Color::rgba(199, 233, 173, 0.5),
    Color::rgba(237, 248, 185, 0.5),
    Color::rgba(255, 237, 170, 0.5),
    Color::rgba(254, 201, 128, 0.5),
    Color::rgba(232, 91, 58, 0.5),
    Color::rgba(215, 25, 28, 0.5),
];

/// Overlay outline width.
pub const ISOCHRONE_STROKE_WIDTH: f32 = 1.0;

/// Default map centre (longitude, latitude), central Amsterdam.
pub const DEFAULT_CENTER: (f64, f64) = (4.887, 52.373);

/// Default map zoom.
pub const DEFAULT_ZOOM: f64 = 10.0;

/// Mapbox Isochrone API endpoint, without the routing profile.
pub const DEFAULT_API_BASE: &str = "https://api.mapbox.com/isochrone/v1";

/// Mapbox routing profile namespace.
pub const DEFAULT_PROFILE_NAMESPACE: &str = "mapbox";

/// Environment variable that carries the routing API credential.
pub const ACCESS_TOKEN_ENV: &str = "MAPBOX_ACCESS_TOKEN";

/// Environment variable overriding the API endpoint.
pub const API_BASE_ENV: &str = "ISOCHRONE_API_BASE";

/// Environment variable setting a request timeout in seconds.
pub const TIMEOUT_ENV: &str = "ISOCHRONE_TIMEOUT_SECS";
