use crate::{
    core::{
        config::IsochroneConfig,
        constants::{ISOCHRONE_LAYER_NAME, ISOCHRONE_STROKE_WIDTH},
        geo::Projection,
        map::Map,
    },
    data::geojson::read_features,
    isochrone::{
        request::{IsochroneRequest, TransportMode},
        transport::IsochroneTransport,
    },
    layers::vector::{Color, Style, VectorLayer},
    MapError, Result,
};
use futures::future::try_join_all;

/// Fetches isochrones for a batch of requests and paints one overlay per response
pub struct IsochronePipeline<T: IsochroneTransport> {
    transport: T,
    palette: Vec<Color>,
}

impl<T: IsochroneTransport> IsochronePipeline<T> {
    /// Creates a pipeline that colours overlays from the configured palette
    pub fn new(transport: T, config: &IsochroneConfig) -> Self {
        Self {
            transport,
            palette: config.palette.clone(),
        }
    }

    /// The transport requests are dispatched through
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replaces the previous run's overlays with one layer per request.
    ///
    /// Overlays are cleared first. All requests are in flight together; the
    /// run waits for every response, then for every body, and only then adds
    /// layers. Any failure aborts the run with nothing painted. Colour and
    /// z-order follow the position in `requests`.
    pub async fn run(
        &self,
        map: &mut Map,
        requests: &[IsochroneRequest],
        mode: TransportMode,
    ) -> Result<usize> {
        if requests.len() > self.palette.len() {
            return Err(MapError::CapacityExceeded {
                requested: requests.len(),
                available: self.palette.len(),
            });
        }

        map.remove_layers_named(ISOCHRONE_LAYER_NAME);

        log::debug!(
            "dispatching {} {} isochrone request(s): {:?} min",
            requests.len(),
            mode,
            requests.iter().map(|r| r.minutes).collect::<Vec<_>>()
        );

        let responses =
            try_join_all(requests.iter().map(|r| self.transport.send(&r.url))).await?;
        let bodies =
            try_join_all(responses.into_iter().map(|r| self.transport.json(r))).await?;

        let native = map.native_projection();
        let mut layers = Vec::with_capacity(bodies.len());
        for ((request, body), color) in requests.iter().zip(&bodies).zip(&self.palette) {
            let features = read_features(body, Projection::Epsg4326, native)?;
            layers.push((request.minutes, *color, features));
        }

        let painted = layers.len();
        for (minutes, color, features) in layers {
            let id = map.next_layer_id(ISOCHRONE_LAYER_NAME);
            let title = format!("{}_{}", mode, minutes);
            log::info!("painting isochrone {} ({} feature(s), {})", title, features.len(), color);

            let layer = VectorLayer::new(id, ISOCHRONE_LAYER_NAME.to_string())
                .with_title(title)
                .with_style(Style::polygon(color, Color::WHITE, ISOCHRONE_STROKE_WIDTH))
                .with_features(features);
            map.add_layer(Box::new(layer))?;
        }
        Ok(painted)
    }
}
