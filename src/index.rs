//! Quad index powering containment and nearest lookups.
//!
//! Entries are bucketed by their quad at the configured index zoom in an
//! ordered map. Quad values of one zoom level are laid out so that the
//! descendants of any quad occupy a contiguous range, which turns a
//! containment query into one range scan.

use crate::bias::MAX_ZOOM;
use crate::compute::validation::validate_lat_lng;
use crate::config::Config;
use crate::error::{Result, ZQuadError};
use crate::quad::ZQuad;
use crate::spatial::knn;
use geo::Point;
use std::collections::BTreeMap;

/// Values stored by the quad they were inserted at.
pub struct QuadIndex<T> {
    /// Buckets keyed by the value of the index-zoom quad
    cells: BTreeMap<u64, Vec<IndexedEntry<T>>>,
    len: usize,
    config: Config,
}

struct IndexedEntry<T> {
    quad: ZQuad,
    data: T,
}

impl<T> QuadIndex<T> {
    /// Create an index with the default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            cells: BTreeMap::new(),
            len: 0,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Insert a value at a WGS84 position, returning the zoom-26 quad it was
    /// stored under.
    pub fn insert(&mut self, lat: f64, lng: f64, data: T) -> Result<ZQuad> {
        let quad = ZQuad::from_wgs84(lat, lng)?;
        self.insert_quad(quad, data)?;
        Ok(quad)
    }

    /// Insert a value at a quad. The quad must be at least as deep as the
    /// index zoom.
    pub fn insert_quad(&mut self, quad: ZQuad, data: T) -> Result<()> {
        if quad.zoom() < self.config.index_zoom {
            return Err(ZQuadError::ZoomOutOfRange {
                zoom: quad.zoom(),
                requested: self.config.index_zoom,
            });
        }
        let cell = quad.clamp_to_zoom(self.config.index_zoom);
        self.cells
            .entry(cell.value())
            .or_default()
            .push(IndexedEntry { quad, data });
        self.len += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        log::debug!(
            "clearing quad index: {} entries in {} cells",
            self.len,
            self.cells.len()
        );
        self.cells.clear();
        self.len = 0;
    }

    fn entries(&self) -> impl Iterator<Item = &IndexedEntry<T>> + '_ {
        self.cells.values().flatten()
    }

    /// All values stored at `quad` or any of its descendants, in quad order.
    pub fn within(&self, quad: &ZQuad) -> Vec<(ZQuad, &T)> {
        let index_zoom = self.config.index_zoom;
        if quad.zoom() > index_zoom {
            // Finer than a bucket: scan the one bucket that holds it.
            let cell = quad.clamp_to_zoom(index_zoom);
            return self
                .cells
                .get(&cell.value())
                .into_iter()
                .flatten()
                .filter(|entry| quad.is_ancestor_of(&entry.quad))
                .map(|entry| (entry.quad, &entry.data))
                .collect();
        }

        match quad.descendant_range(index_zoom) {
            Ok(range) => self
                .cells
                .range(range)
                .flat_map(|(_, bucket)| bucket)
                .map(|entry| (entry.quad, &entry.data))
                .collect(),
            Err(e) => {
                log::warn!("containment query failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Up to `k` values nearest to a WGS84 position, capped by
    /// `max_results`, with their distance under the configured metric.
    pub fn nearest(&self, lat: f64, lng: f64, k: usize) -> Result<Vec<(ZQuad, f64, &T)>> {
        validate_lat_lng(lat, lng)?;
        let center = Point::new(lng, lat);
        let limit = k.min(self.config.max_results);
        Ok(knn(
            &center,
            self.entries().map(|entry| (entry.quad, &entry.data)),
            limit,
            self.config.distance_metric,
        ))
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            entries: self.len,
            cells: self.cells.len(),
            index_zoom: self.config.index_zoom,
        }
    }
}

impl<T> Default for QuadIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about a quad index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub entries: usize,
    /// Distinct index-zoom quads holding at least one entry
    pub cells: usize,
    pub index_zoom: u8,
}

impl IndexStats {
    /// Average entries per occupied cell
    pub fn density(&self) -> f64 {
        if self.cells == 0 {
            return 0.0;
        }
        self.entries as f64 / self.cells as f64
    }

    pub fn is_leaf_indexed(&self) -> bool {
        self.index_zoom == MAX_ZOOM
    }
}
