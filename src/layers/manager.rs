use crate::{layers::base::LayerTrait, MapError, Result};

use crate::prelude::HashMap;

/// Manages layers for the map, handling ordering and group removal by name
pub struct LayerManager {
    /// All layers indexed by ID
    layers: HashMap<String, Box<dyn LayerTrait>>,
    /// Ordered list of layer IDs for rendering (sorted by z-index, stable for ties)
    render_order: Vec<String>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            layers: HashMap::default(),
            render_order: Vec::new(),
        }
    }

    /// Adds a layer to the manager
    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        let layer_id = layer.id().to_string();
        if self.layers.contains_key(&layer_id) {
            return Err(MapError::Layer(format!("duplicate layer id {}", layer_id)));
        }
        let z_index = layer.z_index();

        self.layers.insert(layer_id.clone(), layer);

        // Insert after every layer with an equal or lower z-index
        let insert_pos = self
            .render_order
            .iter()
            .position(|id| {
                self.layers
                    .get(id)
                    .map(|l| l.z_index() > z_index)
                    .unwrap_or(false)
            })
            .unwrap_or(self.render_order.len());

        self.render_order.insert(insert_pos, layer_id);
        Ok(())
    }

    /// Removes a layer from the manager
    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn LayerTrait>> {
        self.render_order.retain(|id| id != layer_id);
        self.layers.remove(layer_id)
    }

    /// Removes every layer whose name matches, returning how many were removed
    pub fn remove_named(&mut self, name: &str) -> usize {
        let doomed: Vec<String> = self
            .render_order
            .iter()
            .filter(|id| self.layers.get(*id).is_some_and(|l| l.name() == name))
            .cloned()
            .collect();

        for id in &doomed {
            self.remove_layer(id);
        }
        doomed.len()
    }

    /// Gets a reference to a layer by ID
    pub fn get_layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layers.get(layer_id).map(|l| l.as_ref())
    }

    /// Gets all layers in render order
    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        self.render_order
            .iter()
            .filter_map(|id| self.layers.get(id).map(|l| l.as_ref()))
            .collect()
    }

    /// Gets the layers carrying `name`, in render order
    pub fn layers_named(&self, name: &str) -> Vec<&dyn LayerTrait> {
        self.layers()
            .into_iter()
            .filter(|l| l.name() == name)
            .collect()
    }

    /// Gets the number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Checks if the manager is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::vector::VectorLayer;

    fn layer(id: &str, name: &str, z: i32) -> Box<dyn LayerTrait> {
        let mut l = VectorLayer::new(id.to_string(), name.to_string());
        l.set_z_index(z);
        Box::new(l)
    }

    #[test]
    fn test_render_order_by_z_index_then_insertion() {
        let mut manager = LayerManager::new();
        manager.add_layer(layer("marker", "isochroneStartPoint", 10)).unwrap();
        manager.add_layer(layer("a", "isochrone", 0)).unwrap();
        manager.add_layer(layer("b", "isochrone", 0)).unwrap();

        let ids: Vec<&str> = manager.layers().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["a", "b", "marker"]);
    }

    #[test]
    fn test_remove_named_only_touches_group() {
        let mut manager = LayerManager::new();
        manager.add_layer(layer("marker", "isochroneStartPoint", 10)).unwrap();
        manager.add_layer(layer("a", "isochrone", 0)).unwrap();
        manager.add_layer(layer("b", "isochrone", 0)).unwrap();

        assert_eq!(manager.remove_named("isochrone"), 2);
        assert_eq!(manager.len(), 1);
        assert!(manager.layers_named("isochrone").is_empty());
        assert_eq!(manager.layers_named("isochroneStartPoint").len(), 1);
        assert_eq!(manager.remove_named("isochrone"), 0);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut manager = LayerManager::new();
        manager.add_layer(layer("a", "isochrone", 0)).unwrap();
        assert!(manager.add_layer(layer("a", "isochrone", 0)).is_err());
        assert_eq!(manager.len(), 1);
    }
}
