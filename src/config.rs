//! Settings for the quad index and the command line tool.
use crate::bias::MAX_ZOOM;
use crate::spatial::DistanceMetric;
use serde::de::Error;

/// Index and query configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Zoom at which `QuadIndex` buckets its entries
    #[serde(default = "Config::default_index_zoom")]
    pub index_zoom: u8,

    #[serde(default)]
    pub distance_metric: DistanceMetric,

    /// Cap on results returned by nearest queries
    #[serde(default = "Config::default_max_results")]
    pub max_results: usize,
}

impl Config {
    const fn default_index_zoom() -> u8 {
        MAX_ZOOM
    }

    const fn default_max_results() -> usize {
        100
    }

    pub fn with_index_zoom(mut self, zoom: u8) -> Self {
        assert!(zoom <= MAX_ZOOM, "Index zoom must be at most {}", MAX_ZOOM);
        if zoom < 8 {
            log::warn!(
                "Index zoom {} is very coarse; every entry in a cell shares one key range.",
                zoom
            );
        }
        self.index_zoom = zoom;
        self
    }

    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = metric;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        assert!(max_results > 0, "Max results must be greater than zero");
        self.max_results = max_results;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.index_zoom > MAX_ZOOM {
            return Err(format!(
                "Index zoom must be at most {}, got {}",
                MAX_ZOOM, self.index_zoom
            ));
        }

        if self.max_results == 0 {
            return Err("Max results must be greater than zero".to_string());
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_zoom: Self::default_index_zoom(),
            distance_metric: DistanceMetric::default(),
            max_results: Self::default_max_results(),
        }
    }
}
