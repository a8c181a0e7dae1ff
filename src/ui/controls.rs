use crate::core::{
    constants::MOUSE_POSITION_PRECISION,
    geo::{Point, Projection},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleUnits {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    /// Pointer coordinate readout in `projection`
    MousePosition {
        projection: Projection,
        precision: usize,
    },
    ScaleLine {
        units: ScaleUnits,
    },
    /// Free-standing button element
    Button {
        title: String,
        icon: Option<String>,
    },
}

/// On-screen element placed over the map
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub id: String,
    pub class_name: String,
    pub kind: ControlKind,
}

impl Control {
    pub fn mouse_position() -> Self {
        Self {
            id: "mousePosition".to_string(),
            class_name: "mousePosition".to_string(),
            kind: ControlKind::MousePosition {
                projection: Projection::Epsg4326,
                precision: MOUSE_POSITION_PRECISION,
            },
        }
    }

    pub fn scale_line() -> Self {
        Self {
            id: "scaleLine".to_string(),
            class_name: "ol-scale-line".to_string(),
            kind: ControlKind::ScaleLine {
                units: ScaleUnits::Metric,
            },
        }
    }

    pub fn button(id: &str, class_name: &str, title: &str, icon: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            class_name: class_name.to_string(),
            kind: ControlKind::Button {
                title: title.to_string(),
                icon: icon.map(str::to_string),
            },
        }
    }

    /// Readout text for a mouse position control, `None` for other kinds
    pub fn readout(&self, pointer: Point, native: Projection) -> Option<String> {
        match &self.kind {
            ControlKind::MousePosition {
                projection,
                precision,
            } => {
                let coord = Projection::transform([pointer.x, pointer.y], native, *projection);
                Some(create_string_xy(coord, *precision))
            }
            _ => None,
        }
    }
}

/// Formats a coordinate as `x, y` with a fixed number of decimals
pub fn create_string_xy(coord: [f64; 2], precision: usize) -> String {
    format!("{:.*}, {:.*}", precision, coord[0], precision, coord[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_string_xy() {
        assert_eq!(create_string_xy([4.88712, 52.37349], 3), "4.887, 52.373");
        assert_eq!(create_string_xy([-1.0, 0.5], 1), "-1.0, 0.5");
    }

    #[test]
    fn test_button_has_no_readout() {
        let button = Control::button("isoButton", "myButton", "Isochrone tool", None);
        assert!(button
            .readout(Point::new(0.0, 0.0), Projection::Epsg3857)
            .is_none());
    }
}
