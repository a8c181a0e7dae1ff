//! Configuration for the isochrone routing client
//!
//! Values come from `Default` or from the environment through
//! [`IsochroneConfig::from_env`]. The access credential is always injected,
//! never compiled in.

use crate::core::constants::{
    ACCESS_TOKEN_ENV, API_BASE_ENV, DEFAULT_API_BASE, DEFAULT_PROFILE_NAMESPACE, MAX_CONTOURS,
    PALETTE, TIMEOUT_ENV,
};
use crate::layers::vector::Color;
use crate::{MapError, Result};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct IsochroneConfig {
    /// Endpoint up to and excluding the profile, e.g. `https://api.mapbox.com/isochrone/v1`
    pub api_base: String,
    /// Profile namespace placed before the transport mode
    pub profile_namespace: String,
    /// Static API credential appended as `access_token`
    pub access_token: Option<String>,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
    /// Overlay fill colours, indexed by dispatch position
    pub palette: Vec<Color>,
    pub max_contours: usize,
}

impl Default for IsochroneConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            profile_namespace: DEFAULT_PROFILE_NAMESPACE.to_string(),
            access_token: None,
            request_timeout: None,
            user_agent: format!("isochrone-map/{}", env!("CARGO_PKG_VERSION")),
            palette: PALETTE.to_vec(),
            max_contours: MAX_CONTOURS,
        }
    }
}

impl IsochroneConfig {
    /// Builds a configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(token) = lookup(ACCESS_TOKEN_ENV).filter(|t| !t.trim().is_empty()) {
            config.access_token = Some(token.trim().to_string());
        }

        if let Some(base) = lookup(API_BASE_ENV).filter(|b| !b.trim().is_empty()) {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                MapError::Config(format!("{} must be a whole number of seconds, got {:?}", TIMEOUT_ENV, raw))
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Returns the access token or a configuration error naming the variable to set.
    pub fn require_token(&self) -> Result<&str> {
        self.access_token.as_deref().ok_or_else(|| {
            MapError::Config(format!("no routing access token; set {}", ACCESS_TOKEN_ENV))
        })
    }

    /// Effective contour limit: never more than the palette can colour.
    pub fn contour_limit(&self) -> usize {
        self.max_contours.min(self.palette.len())
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(MapError::Config("palette must contain at least one colour".into()));
        }
        if self.max_contours == 0 {
            return Err(MapError::Config("max_contours must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = IsochroneConfig::default();
        assert_eq!(config.api_base, "https://api.mapbox.com/isochrone/v1");
        assert_eq!(config.palette.len(), 9);
        assert_eq!(config.contour_limit(), 9);
        assert!(config.access_token.is_none());
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_from_lookup_reads_token_and_overrides() {
        let config = IsochroneConfig::from_lookup(lookup(&[
            ("MAPBOX_ACCESS_TOKEN", " pk.test "),
            ("ISOCHRONE_API_BASE", "http://localhost:8080/iso/"),
            ("ISOCHRONE_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.require_token().unwrap(), "pk.test");
        assert_eq!(config.api_base, "http://localhost:8080/iso");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let config = IsochroneConfig::from_lookup(lookup(&[])).unwrap();
        assert!(matches!(config.require_token(), Err(MapError::Config(_))));
    }

    #[test]
    fn test_bad_timeout_rejected() {
        let result = IsochroneConfig::from_lookup(lookup(&[("ISOCHRONE_TIMEOUT_SECS", "soon")]));
        assert!(matches!(result, Err(MapError::Config(_))));
    }

    #[test]
    fn test_contour_limit_bounded_by_palette() {
        let mut config = IsochroneConfig::default();
        config.palette.truncate(3);
        assert_eq!(config.contour_limit(), 3);
    }
}
