//! Coordinate validation and GeoJSON conversion.

#[cfg(feature = "geojson")]
pub mod geojson;
pub mod validation;
