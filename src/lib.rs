//! # isochrone-map
//!
//! Travel-time overlays for a layered map surface.
//!
//! The crate models the map surface in memory (layer stack, click listeners,
//! controls, projections) and drives the isochrone workflow on top of it:
//! pick a start point, validate the form, fan out one routing request per
//! duration and paint one styled overlay per response.

pub mod core;
pub mod data;
pub mod input;
pub mod isochrone;
pub mod layers;
pub mod prelude;
pub mod tiles;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::IsochroneConfig,
    geo::{LatLng, Point, Projection},
    map::{ListenerId, Map, View},
};

pub use layers::{base::LayerTrait, tile::TileLayer, vector::VectorLayer};

pub use input::events::{Cursor, MapEvent};

pub use ui::{
    controls::Control,
    form::{IsochroneForm, PanelDisplay, ToolToggle},
};

pub use isochrone::{
    picker::PointPicker,
    pipeline::IsochronePipeline,
    request::{build_requests, IsochroneRequest, TransportMode, ValidationError},
    tool::IsochroneTool,
    transport::{HttpTransport, IsochroneTransport},
};

pub use data::geojson::{read_features, Feature, GeoJson};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("{requested} isochrones requested but only {available} colours are available")]
    CapacityExceeded { requested: usize, available: usize },

    #[error("Point picker is already waiting for a map click")]
    PickerAlreadyArmed,
}

/// Error type alias for convenience
pub type Error = MapError;

/// Installs `env_logger` as the `log` backend. Safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
