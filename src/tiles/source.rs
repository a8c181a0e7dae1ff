use crate::core::geo::TileCoord;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;

    /// Attribution text shown with the tiles.
    fn attribution(&self) -> &str {
        ""
    }
}

/// Default OpenStreetMap tile server, rotating over its subdomains.
pub struct OpenStreetMapSource {
    subdomains: Vec<&'static str>,
}

impl OpenStreetMapSource {
    pub fn new() -> Self {
        Self {
            subdomains: vec!["a", "b", "c"],
        }
    }
}

impl Default for OpenStreetMapSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSource for OpenStreetMapSource {
    fn url(&self, coord: TileCoord) -> String {
        if self.subdomains.is_empty() {
            return format!("https://tile.openstreetmap.org/{}/{}/{}.png", coord.z, coord.x, coord.y);
        }

        let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
        format!(
            "https://{}.tile.openstreetmap.org/{}/{}/{}.png",
            self.subdomains[idx], coord.z, coord.x, coord.y
        )
    }

    fn attribution(&self) -> &str {
        "© OpenStreetMap contributors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osm_url_rotates_subdomains() {
        let source = OpenStreetMapSource::new();
        assert_eq!(
            source.url(TileCoord::new(0, 0, 1)),
            "https://a.tile.openstreetmap.org/1/0/0.png"
        );
        assert_eq!(
            source.url(TileCoord::new(1, 0, 1)),
            "https://b.tile.openstreetmap.org/1/1/0.png"
        );
    }
}
