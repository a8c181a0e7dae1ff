//! Prelude module for common isochrone-map types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use isochrone_map::prelude::*;`

pub use crate::core::{
    config::IsochroneConfig,
    constants::{ISOCHRONE_LAYER_NAME, PALETTE, START_POINT_LAYER_NAME},
    geo::{LatLng, Point, Projection},
    map::{ListenerId, Map, View},
};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    manager::LayerManager,
    tile::TileLayer,
    vector::{Color, Style, VectorLayer},
};

pub use crate::data::geojson::{read_features, Feature, GeoJson};

pub use crate::input::events::{Cursor, EventHandled, MapEvent};

pub use crate::ui::{
    controls::Control,
    form::{IsochroneForm, PanelDisplay, ToolToggle},
};

pub use crate::isochrone::{
    build_requests, HttpTransport, IsochronePipeline, IsochroneRequest, IsochroneTool,
    IsochroneTransport, PointPicker, TransportMode, ValidationError,
};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
