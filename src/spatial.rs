//! Distances between quads, leveraging the geo crate.
//!
//! Quads are measured between their centers, so the result is only as
//! precise as the coarser of the two quads.

use crate::quad::ZQuad;
use geo::{Distance, Euclidean, Geodesic, Haversine, Point, Rhumb};
use serde::{Deserialize, Serialize};

/// Distance metrics for spatial calculations.
///
/// Different metrics are appropriate for different use cases:
/// - **Haversine**: Fast spherical distance, good for most lon/lat calculations
/// - **Geodesic**: More accurate ellipsoidal distance (Karney 2013), slower
/// - **Rhumb**: Constant bearing distance, useful for navigation
/// - **Euclidean**: Planar distance in degrees, mostly useful for comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Haversine formula - assumes spherical Earth, fast and accurate enough for most uses
    #[default]
    Haversine,
    /// Geodesic distance using Karney (2013) - accounts for Earth's ellipsoid
    Geodesic,
    /// Rhumb line (loxodrome) - maintains constant bearing
    Rhumb,
    /// Euclidean distance on raw degrees
    Euclidean,
}

/// Distance between two points using the specified metric.
///
/// Meters for every metric except `Euclidean`, which works in degrees.
pub fn point_distance(point1: &Point, point2: &Point, metric: DistanceMetric) -> f64 {
    match metric {
        DistanceMetric::Haversine => Haversine.distance(*point1, *point2),
        DistanceMetric::Geodesic => Geodesic.distance(*point1, *point2),
        DistanceMetric::Rhumb => Rhumb.distance(*point1, *point2),
        DistanceMetric::Euclidean => Euclidean.distance(*point1, *point2),
    }
}

/// Calculate the distance between the centers of two quads.
///
/// # Examples
///
/// ```rust
/// use zquad::{ZQuad, spatial::{distance_between, DistanceMetric}};
///
/// let nyc = ZQuad::from_wgs84(40.7128, -74.0060)?;
/// let la = ZQuad::from_wgs84(34.0522, -118.2437)?;
///
/// let dist = distance_between(&nyc, &la, DistanceMetric::Haversine);
/// assert!(dist > 3_900_000.0); // ~3,944 km
///
/// let dist_geodesic = distance_between(&nyc, &la, DistanceMetric::Geodesic);
/// assert!(dist_geodesic > 3_900_000.0);
/// # Ok::<(), zquad::ZQuadError>(())
/// ```
pub fn distance_between(quad1: &ZQuad, quad2: &ZQuad, metric: DistanceMetric) -> f64 {
    point_distance(&quad1.center(), &quad2.center(), metric)
}

/// The K entries whose quad centers are nearest to `center`.
///
/// Brute force over `entries`; returns `(quad, distance, data)` sorted by
/// distance, nearest first.
pub fn knn<'a, T>(
    center: &Point,
    entries: impl IntoIterator<Item = (ZQuad, &'a T)>,
    k: usize,
    metric: DistanceMetric,
) -> Vec<(ZQuad, f64, &'a T)> {
    let mut distances: Vec<(ZQuad, f64, &'a T)> = entries
        .into_iter()
        .map(|(quad, data)| (quad, point_distance(center, &quad.center(), metric), data))
        .collect();

    distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    distances.truncate(k);
    distances
}
