use crate::{
    core::{
        constants::{
            PICKED_COORD_PRECISION, START_POINT_LAYER_NAME, START_POINT_RADIUS, START_POINT_TITLE,
            START_POINT_Z_INDEX,
        },
        geo::{LatLng, Point, Projection},
        map::{ListenerId, Map},
    },
    input::events::Cursor,
    layers::vector::{Color, Style, VectorLayer},
    ui::form::IsochroneForm,
    MapError, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Idle,
    /// Waiting for one click delivered to this listener
    Armed(ListenerId),
}

/// One-shot start point picker.
///
/// `arm` subscribes to the next map click; `complete` consumes it, writes the
/// coordinate into the form, replaces the marker and returns to `Idle`.
#[derive(Debug, Default)]
pub struct PointPicker {
    state: PickerState,
}

impl PointPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, PickerState::Armed(_))
    }

    pub fn listener(&self) -> Option<ListenerId> {
        match self.state {
            PickerState::Armed(id) => Some(id),
            PickerState::Idle => None,
        }
    }

    /// Subscribes to the next map click and switches the cursor to a crosshair.
    ///
    /// Fails with `PickerAlreadyArmed` while a pick is pending.
    pub fn arm(&mut self, map: &mut Map) -> Result<ListenerId> {
        if self.is_armed() {
            return Err(MapError::PickerAlreadyArmed);
        }
        let listener = map.on_single_click();
        map.set_cursor(Cursor::Crosshair);
        self.state = PickerState::Armed(listener);
        Ok(listener)
    }

    /// Consumes a click at `coordinate` (native projection).
    ///
    /// Returns the picked geographic position, or `None` when not armed.
    pub fn complete(
        &mut self,
        map: &mut Map,
        form: &mut IsochroneForm,
        coordinate: Point,
    ) -> Result<Option<LatLng>> {
        let PickerState::Armed(listener) = self.state else {
            return Ok(None);
        };

        map.remove_layers_named(START_POINT_LAYER_NAME);

        let [lng, lat] = Projection::transform(
            [coordinate.x, coordinate.y],
            map.native_projection(),
            Projection::Epsg4326,
        );
        form.coord_x = format!("{:.*}", PICKED_COORD_PRECISION, lng);
        form.coord_y = format!("{:.*}", PICKED_COORD_PRECISION, lat);

        let id = map.next_layer_id(START_POINT_LAYER_NAME);
        let marker = VectorLayer::single_point(id, START_POINT_LAYER_NAME.to_string(), coordinate)
            .with_title(START_POINT_TITLE)
            .with_style(Style::circle(START_POINT_RADIUS, Color::BLACK))
            .with_z_index(START_POINT_Z_INDEX);
        let added = map.add_layer(Box::new(marker));

        map.un(listener);
        map.set_cursor(Cursor::Default);
        self.state = PickerState::Idle;
        added?;

        log::info!("start point picked at {}, {}", form.coord_x, form.coord_y);
        Ok(Some(LatLng::new(lat, lng)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::base::LayerTrait;

    #[test]
    fn test_arm_sets_crosshair_and_guards_reentry() {
        let mut map = Map::default();
        let mut picker = PointPicker::new();

        let listener = picker.arm(&mut map).unwrap();
        assert!(map.is_listening(listener));
        assert_eq!(map.cursor(), Cursor::Crosshair);
        assert!(matches!(picker.arm(&mut map), Err(MapError::PickerAlreadyArmed)));
        assert_eq!(picker.state(), PickerState::Armed(listener));
    }

    #[test]
    fn test_complete_fills_form_and_returns_to_idle() {
        let mut map = Map::default();
        let mut form = IsochroneForm::new();
        let mut picker = PointPicker::new();
        let listener = picker.arm(&mut map).unwrap();

        let click = LatLng::new(52.37, 4.9).to_mercator();
        let picked = picker.complete(&mut map, &mut form, click).unwrap().unwrap();

        assert!((picked.lng - 4.9).abs() < 1e-9);
        assert_eq!(form.coord_x, "4.9000");
        assert_eq!(form.coord_y, "52.3700");
        assert_eq!(picker.state(), PickerState::Idle);
        assert!(!map.is_listening(listener));
        assert_eq!(map.cursor(), Cursor::Default);

        let markers = map.layers_named(START_POINT_LAYER_NAME);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].z_index(), START_POINT_Z_INDEX);
        assert_eq!(markers[0].title(), "Starting point");
    }

    #[test]
    fn test_complete_when_idle_is_noop() {
        let mut map = Map::default();
        let mut form = IsochroneForm::new();
        let mut picker = PointPicker::new();

        let picked = picker
            .complete(&mut map, &mut form, Point::new(0.0, 0.0))
            .unwrap();
        assert!(picked.is_none());
        assert_eq!(map.layer_count(), 0);
        assert!(form.coord_x.is_empty());
    }
}
