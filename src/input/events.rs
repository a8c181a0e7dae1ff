use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Map event types that can be dispatched to the map surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// Single click/tap; `coordinate` is in the map's native projection
    SingleClick { coordinate: Point },
    /// Pointer moved over the map
    PointerMove { coordinate: Point },
}

impl MapEvent {
    pub fn coordinate(&self) -> Point {
        match self {
            MapEvent::SingleClick { coordinate } | MapEvent::PointerMove { coordinate } => {
                *coordinate
            }
        }
    }
}

/// Whether an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

/// Pointer cursor shown over the map element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cursor {
    #[default]
    Default,
    Crosshair,
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cursor::Default => write!(f, "auto"),
            Cursor::Crosshair => write!(f, "crosshair"),
        }
    }
}
