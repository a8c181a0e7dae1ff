use crate::{
    core::geo::Point,
    data::geojson::Feature,
    layers::base::{LayerProperties, LayerTrait, LayerType},
};

use geo::BoundingRect;
use geo_types::{Geometry, GeometryCollection, Rect};
use serde::{Deserialize, Serialize};

/// RGBA colour; alpha is a 0.0 to 1.0 fraction as in CSS `rgba()`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Circle symbol drawn for point features
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleStyle {
    pub radius: f32,
    pub fill: Fill,
}

/// Style applied to every feature of a vector layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub image: Option<CircleStyle>,
}

impl Style {
    /// Polygon style with a fill and an outline
    pub fn polygon(fill: Color, stroke: Color, stroke_width: f32) -> Self {
        Self {
            fill: Some(Fill { color: fill }),
            stroke: Some(Stroke {
                color: stroke,
                width: stroke_width,
            }),
            image: None,
        }
    }

    /// Point style drawn as a filled circle
    pub fn circle(radius: f32, fill: Color) -> Self {
        Self {
            fill: None,
            stroke: None,
            image: Some(CircleStyle {
                radius,
                fill: Fill { color: fill },
            }),
        }
    }
}

/// Layer of vector features held in the map's native projection
pub struct VectorLayer {
    properties: LayerProperties,
    features: Vec<Feature>,
    style: Style,
}

impl VectorLayer {
    pub fn new(id: String, name: String) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Vector),
            features: Vec::new(),
            style: Style::default(),
        }
    }

    /// Layer holding a single point feature
    pub fn single_point(id: String, name: String, point: Point) -> Self {
        let mut layer = Self::new(id, name);
        layer
            .features
            .push(Feature::new(Geometry::Point(geo_types::Point::new(point.x, point.y))));
        layer
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.properties = self.properties.with_title(title);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_features(mut self, features: Vec<Feature>) -> Self {
        self.features = features;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.properties = self.properties.with_z_index(z_index);
        self
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn style(&self) -> &Style {
        &self.style
    }
}

impl LayerTrait for VectorLayer {
    crate::impl_layer_trait!(VectorLayer, properties);

    fn extent(&self) -> Option<Rect<f64>> {
        let collection: GeometryCollection<f64> = self
            .features
            .iter()
            .map(|f| f.geometry.clone())
            .collect();
        collection.bounding_rect()
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.properties.title,
            "name": self.properties.name,
            "features": self.features.len(),
            "style": self.style,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::polygon;

    #[test]
    fn test_color_display_matches_css() {
        assert_eq!(Color::rgba(43, 131, 186, 0.5).to_string(), "rgba(43, 131, 186, 0.5)");
        assert_eq!(Color::WHITE.to_string(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn test_single_point_layer() {
        let layer = VectorLayer::single_point(
            "p".to_string(),
            "isochroneStartPoint".to_string(),
            Point::new(10.0, 20.0),
        )
        .with_style(Style::circle(3.0, Color::BLACK))
        .with_z_index(10);

        assert_eq!(layer.features().len(), 1);
        assert_eq!(layer.z_index(), 10);
        assert_eq!(layer.style().image.map(|c| c.radius), Some(3.0));

        let extent = layer.extent().unwrap();
        assert_eq!(extent.min().x, 10.0);
        assert_eq!(extent.max().y, 20.0);
    }

    #[test]
    fn test_polygon_extent() {
        let poly = polygon![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 3.0), (x: 0.0, y: 0.0)];
        let layer = VectorLayer::new("i".into(), "isochrone".into())
            .with_features(vec![Feature::new(Geometry::Polygon(poly))]);

        let extent = layer.extent().unwrap();
        assert_eq!(extent.width(), 4.0);
        assert_eq!(extent.height(), 3.0);
    }

    #[test]
    fn test_empty_layer_has_no_extent() {
        let layer = VectorLayer::new("e".into(), "isochrone".into());
        assert!(layer.extent().is_none());
    }
}
