pub mod controls;
pub mod form;

pub use controls::{Control, ControlKind, ScaleUnits};
pub use form::{IsochroneForm, PanelDisplay, ToolToggle};
