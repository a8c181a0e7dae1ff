//! The isochrone tool: start point picking, request building and the
//! fetch/render pipeline that paints travel-time overlays.

pub mod picker;
pub mod pipeline;
pub mod request;
pub mod tool;
pub mod transport;

pub use picker::{PickerState, PointPicker};
pub use pipeline::IsochronePipeline;
pub use request::{build_requests, parse_durations, Axis, IsochroneRequest, TransportMode, ValidationError};
pub use tool::IsochroneTool;
pub use transport::{HttpTransport, IsochroneTransport};
