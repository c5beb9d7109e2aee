use crate::ordinate::Ordinate;
use geo::Point;
use serde::{Deserialize, Serialize};

/// A position inside the unit square.
///
/// `lat` runs from 0 (north pole) to 1 (south pole) and `lng` from 0
/// (antimeridian, west side) to 1 (antimeridian, east side).
///
/// # Examples
///
/// ```
/// use zquad_types::point::UnitPoint;
/// use geo::Point;
///
/// let origin = UnitPoint::from_geo(&Point::new(0.0, 0.0));
/// assert_eq!(origin, UnitPoint::new(0.5, 0.5));
///
/// let back = origin.to_geo();
/// assert_eq!(back.x(), 0.0);
/// assert_eq!(back.y(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPoint {
    pub lat: f64,
    pub lng: f64,
}

impl UnitPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Project a WGS84 point (x = longitude, y = latitude).
    pub fn from_geo(point: &Point<f64>) -> Self {
        Self::from_degrees(point.y(), point.x())
    }

    /// Project a WGS84 latitude/longitude pair.
    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self {
            lat: Ordinate::LATITUDE.to_unit(lat),
            lng: Ordinate::LONGITUDE.to_unit(lng),
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Whether both ordinates are inside `[0, 1]`.
    pub fn is_in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.lat) && (0.0..=1.0).contains(&self.lng)
    }

    /// Back to WGS84 degrees.
    pub fn to_geo(&self) -> Point<f64> {
        Point::new(
            Ordinate::LONGITUDE.from_unit(self.lng),
            Ordinate::LATITUDE.from_unit(self.lat),
        )
    }
}
