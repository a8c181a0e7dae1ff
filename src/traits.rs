//! Shared trait abstractions for common patterns
//!
//! Every layer on the map surface, whatever it draws, is managed through
//! [`LayerOperations`] so the layer stack can find, order and remove layers
//! without knowing their concrete type.

use geo_types::Rect;

/// Trait for layer-like objects
pub trait LayerOperations: Send + Sync {
    /// Get layer ID, unique within a map
    fn id(&self) -> &str;

    /// Get layer name; layers sharing a name form a group that can be removed together
    fn name(&self) -> &str;

    /// Get human readable layer title
    fn title(&self) -> &str;

    /// Get layer type
    fn layer_type(&self) -> crate::layers::base::LayerType;

    /// Check if layer is visible
    fn is_visible(&self) -> bool;

    /// Set layer visibility
    fn set_visible(&mut self, visible: bool);

    /// Get layer opacity (0.0 to 1.0)
    fn opacity(&self) -> f32;

    /// Set layer opacity
    fn set_opacity(&mut self, opacity: f32);

    /// Get layer z-index for ordering
    fn z_index(&self) -> i32;

    /// Set layer z-index
    fn set_z_index(&mut self, z_index: i32);

    /// Extent of the layer's content in the map's native projection
    fn extent(&self) -> Option<Rect<f64>> {
        None
    }

    /// Get layer options as a JSON description
    fn options(&self) -> serde_json::Value;

    /// Dynamic casting support
    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}
