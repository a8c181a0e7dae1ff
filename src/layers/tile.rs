use crate::{
    core::geo::{LatLng, TileCoord},
    layers::base::{LayerProperties, LayerTrait, LayerType},
    tiles::source::{OpenStreetMapSource, TileSource},
};

/// Basemap layer backed by a slippy-map tile source
pub struct TileLayer {
    properties: LayerProperties,
    source: Box<dyn TileSource>,
}

impl TileLayer {
    pub fn new(id: String, name: String, source: Box<dyn TileSource>) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Tile),
            source,
        }
    }

    /// OpenStreetMap basemap at the bottom of the stack
    pub fn openstreetmap(id: String, name: String) -> Self {
        Self::new(id, name, Box::new(OpenStreetMapSource::new()))
    }

    /// URL of the tile covering `center` at `zoom`
    pub fn tile_url_at(&self, center: &LatLng, zoom: f64) -> String {
        let z = zoom.round().clamp(0.0, 19.0) as u8;
        self.source.url(TileCoord::from_lat_lng(center, z))
    }

    pub fn attribution(&self) -> &str {
        self.source.attribution()
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(TileLayer, properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.properties.title,
            "attribution": self.source.attribution(),
        })
    }
}
