//! Validation for geographic and unit-square coordinates.

use crate::error::{Result, ZQuadError};
use geo::Point;
use zquad_types::point::UnitPoint;

/// Validates a WGS84 latitude/longitude pair.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0]
///
/// # Examples
///
/// ```
/// use zquad::compute::validation::validate_lat_lng;
///
/// assert!(validate_lat_lng(55.6761, 12.5683).is_ok());
///
/// // Invalid latitude
/// assert!(validate_lat_lng(95.0, 0.0).is_err());
///
/// // Invalid longitude
/// assert!(validate_lat_lng(0.0, -200.0).is_err());
/// ```
pub fn validate_lat_lng(lat: f64, lng: f64) -> Result<()> {
    if !lat.is_finite() {
        return Err(ZQuadError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lng.is_finite() {
        return Err(ZQuadError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lng
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(ZQuadError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lng) {
        return Err(ZQuadError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lng
        )));
    }

    Ok(())
}

/// Validates a `geo::Point` holding longitude in x and latitude in y.
pub fn validate_geographic_point(point: &Point) -> Result<()> {
    validate_lat_lng(point.y(), point.x())
}

/// Validates a position in the unit square, both ordinates in [0.0, 1.0].
pub fn validate_unit_point(point: &UnitPoint) -> Result<()> {
    if !point.lat.is_finite() || !point.lng.is_finite() {
        return Err(ZQuadError::InvalidInput(format!(
            "Unit coordinates must be finite, got: ({}, {})",
            point.lat, point.lng
        )));
    }

    if !point.is_in_unit_square() {
        return Err(ZQuadError::InvalidInput(format!(
            "Unit coordinates out of range [0.0, 1.0]: ({}, {})",
            point.lat, point.lng
        )));
    }

    Ok(())
}
