use crate::{
    core::{
        constants::{DEFAULT_CENTER, DEFAULT_ZOOM},
        geo::{LatLng, Point, Projection},
    },
    input::events::{Cursor, MapEvent},
    layers::{base::LayerTrait, manager::LayerManager, tile::TileLayer},
    ui::controls::Control,
    Result,
};

/// Centre and zoom of the visible map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub center: LatLng,
    pub zoom: f64,
}

impl Default for View {
    fn default() -> Self {
        Self {
            center: LatLng::new(DEFAULT_CENTER.1, DEFAULT_CENTER.0),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Handle returned by [`Map::on_single_click`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The map surface: view, layer stack, click listeners, cursor and controls.
///
/// Coordinates handed to and from the map are in its native projection,
/// [`Projection::Epsg3857`].
pub struct Map {
    view: View,
    layers: LayerManager,
    controls: Vec<Control>,
    click_listeners: Vec<ListenerId>,
    next_listener: u64,
    next_layer: u64,
    cursor: Cursor,
    pointer: Option<Point>,
}

impl Map {
    pub fn new(view: View) -> Self {
        Self {
            view,
            layers: LayerManager::new(),
            controls: Vec::new(),
            click_listeners: Vec::new(),
            next_listener: 0,
            next_layer: 0,
            cursor: Cursor::Default,
            pointer: None,
        }
    }

    /// Map with an OpenStreetMap basemap, a mouse position readout and a metric scale line
    pub fn with_defaults(view: View) -> Result<Self> {
        let mut map = Self::new(view);
        let id = map.next_layer_id("osm");
        map.add_layer(Box::new(TileLayer::openstreetmap(id, "OpenStreetMap".to_string())))?;
        map.add_control(Control::mouse_position());
        map.add_control(Control::scale_line());
        Ok(map)
    }

    pub fn native_projection(&self) -> Projection {
        Projection::Epsg3857
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Allocates a layer id unique within this map
    pub fn next_layer_id(&mut self, prefix: &str) -> String {
        self.next_layer += 1;
        format!("{}-{}", prefix, self.next_layer)
    }

    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        log::debug!(
            "adding {} layer {} ({:?}) at z {}",
            layer.layer_type(),
            layer.id(),
            layer.title(),
            layer.z_index()
        );
        self.layers.add_layer(layer)
    }

    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn LayerTrait>> {
        self.layers.remove_layer(layer_id)
    }

    /// Removes every layer carrying `name`, returning how many went
    pub fn remove_layers_named(&mut self, name: &str) -> usize {
        let removed = self.layers.remove_named(name);
        if removed > 0 {
            log::debug!("removed {} layer(s) named {}", removed, name);
        }
        removed
    }

    /// All layers in render order
    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        self.layers.layers()
    }

    pub fn layers_named(&self, name: &str) -> Vec<&dyn LayerTrait> {
        self.layers.layers_named(name)
    }

    pub fn layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layers.get_layer(layer_id)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Subscribes to single clicks until [`Map::un`] is called
    pub fn on_single_click(&mut self) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.click_listeners.push(id);
        id
    }

    /// Unsubscribes a click listener; returns whether it was registered
    pub fn un(&mut self, listener: ListenerId) -> bool {
        let before = self.click_listeners.len();
        self.click_listeners.retain(|l| *l != listener);
        self.click_listeners.len() != before
    }

    pub fn is_listening(&self, listener: ListenerId) -> bool {
        self.click_listeners.contains(&listener)
    }

    /// Feeds an event to the map, returning the listeners it should be delivered to
    pub fn dispatch(&mut self, event: &MapEvent) -> Vec<ListenerId> {
        match event {
            MapEvent::SingleClick { .. } => self.click_listeners.clone(),
            MapEvent::PointerMove { coordinate } => {
                self.pointer = Some(*coordinate);
                Vec::new()
            }
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    pub fn add_control(&mut self, control: Control) {
        self.controls.push(control);
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    /// Text of the mouse position readout for the last pointer position
    pub fn mouse_position_text(&self) -> Option<String> {
        let pointer = self.pointer?;
        self.controls
            .iter()
            .find_map(|c| c.readout(pointer, self.native_projection()))
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new(View::default())
    }
}
