//! Form state read and written by the isochrone tool.

use crate::isochrone::request::TransportMode;

/// CSS display value of the isochrone input panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelDisplay {
    Block,
    #[default]
    None,
}

impl std::fmt::Display for PanelDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelDisplay::Block => write!(f, "block"),
            PanelDisplay::None => write!(f, "none"),
        }
    }
}

/// The isochrone panel's inputs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IsochroneForm {
    /// Start longitude as typed or picked
    pub coord_x: String,
    /// Start latitude as typed or picked
    pub coord_y: String,
    /// Comma-separated minutes, e.g. `5, 10, 15`
    pub time_input: String,
    pub transport_mode: TransportMode,
    pub panel: PanelDisplay,
}

impl IsochroneForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coordinates(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.coord_x = x.into();
        self.coord_y = y.into();
        self
    }

    pub fn with_durations(mut self, text: impl Into<String>) -> Self {
        self.time_input = text.into();
        self
    }

    pub fn with_mode(mut self, mode: TransportMode) -> Self {
        self.transport_mode = mode;
        self
    }
}

/// Shows and hides the isochrone panel; owns its own open flag
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolToggle {
    open: bool,
}

impl ToolToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the flag and applies it to `panel`, returning the new state
    pub fn toggle(&mut self, panel: &mut PanelDisplay) -> bool {
        self.open = !self.open;
        *panel = if self.open {
            PanelDisplay::Block
        } else {
            PanelDisplay::None
        };
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_display() {
        let mut toggle = ToolToggle::new();
        let mut panel = PanelDisplay::default();
        assert_eq!(panel.to_string(), "none");

        assert!(toggle.toggle(&mut panel));
        assert_eq!(panel, PanelDisplay::Block);
        assert_eq!(panel.to_string(), "block");

        assert!(!toggle.toggle(&mut panel));
        assert_eq!(panel, PanelDisplay::None);
        assert!(!toggle.is_open());
    }
}
