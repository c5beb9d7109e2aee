use crate::ordinate::Ordinate;
use crate::point::UnitPoint;
use geo::{Rect, coord};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle inside the unit square.
///
/// There is no single obvious constructor, so the fields stay private and
/// rects are built with [`UnitRect::from_bounds`] or [`UnitRect::from_corner`].
///
/// # Examples
///
/// ```
/// use zquad_types::point::UnitPoint;
/// use zquad_types::rect::UnitRect;
///
/// let north_west = UnitRect::from_corner(0.0, 0.0, 0.5, 0.5);
/// assert!(north_west.contains(&UnitPoint::new(0.25, 0.25)));
/// assert!(!north_west.contains(&UnitPoint::new(0.75, 0.25)));
///
/// let bounds = north_west.to_geo();
/// assert_eq!(bounds.min().x, -180.0);
/// assert_eq!(bounds.max().y, 90.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitRect {
    top: f64,
    left: f64,
    bottom: f64,
    right: f64,
}

impl UnitRect {
    /// A rect lying on the given boundaries.
    pub fn from_bounds(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        debug_assert!(top <= bottom && left <= right);
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// A rect whose north-west corner is at `(top, left)` with the given extent.
    pub fn from_corner(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self::from_bounds(top, left, top + height, left + width)
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn north_west(&self) -> UnitPoint {
        UnitPoint::new(self.top, self.left)
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: &UnitPoint) -> bool {
        self.top <= point.lat
            && self.left <= point.lng
            && point.lat <= self.bottom
            && point.lng <= self.right
    }

    /// The rect in WGS84 degrees (x = longitude, y = latitude).
    pub fn to_geo(&self) -> Rect<f64> {
        Rect::new(
            coord! {
                x: Ordinate::LONGITUDE.from_unit(self.left),
                y: Ordinate::LATITUDE.from_unit(self.bottom),
            },
            coord! {
                x: Ordinate::LONGITUDE.from_unit(self.right),
                y: Ordinate::LATITUDE.from_unit(self.top),
            },
        )
    }
}
