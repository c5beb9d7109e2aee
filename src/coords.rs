//! Conversion between WGS84 degrees, the unit square, and z-quads.
//!
//! The unit square has the north-west corner of the globe at the origin.
//! Unit latitude goes into the odd bits of a quad's scalar and unit longitude
//! into the even bits, which is what makes an ancestor a plain truncating
//! division of the value.

use crate::bias::{MAX_ZOOM, bias};
use crate::bits::{deinterleave52, interleave26};
use crate::compute::validation::{validate_geographic_point, validate_lat_lng, validate_unit_point};
use crate::error::Result;
use crate::quad::ZQuad;
use geo::{Point, Rect, coord};
use zquad_types::ordinate::Ordinate;
use zquad_types::point::UnitPoint;
use zquad_types::rect::UnitRect;

const GRID_SIZE: f64 = (1u64 << MAX_ZOOM) as f64;
const GRID_MAX: u32 = (1 << MAX_ZOOM) - 1;

/// Quantize a unit ordinate onto the zoom-26 grid. The far edge (unit 1.0)
/// belongs to the last row/column.
fn quantize(unit: f64) -> u32 {
    ((unit * GRID_SIZE).floor() as u32).min(GRID_MAX)
}

fn scale(zoom: u8) -> f64 {
    (1u64 << zoom) as f64
}

impl ZQuad {
    /// The zoom-26 quad containing a WGS84 latitude/longitude.
    ///
    /// ```
    /// use zquad::ZQuad;
    ///
    /// let quad = ZQuad::from_wgs84(0.0, 0.0)?;
    /// assert_eq!(quad.zoom(), 26);
    /// assert_eq!(quad.ancestor(26)?, ZQuad::ROOT);
    /// # Ok::<(), zquad::ZQuadError>(())
    /// ```
    pub fn from_wgs84(lat: f64, lng: f64) -> Result<ZQuad> {
        validate_lat_lng(lat, lng)?;
        ZQuad::from_unit(&UnitPoint::from_degrees(lat, lng))
    }

    /// The zoom-26 quad containing a `geo::Point` (x = longitude, y = latitude).
    pub fn from_point(point: &Point) -> Result<ZQuad> {
        validate_geographic_point(point)?;
        ZQuad::from_unit(&UnitPoint::from_geo(point))
    }

    /// The zoom-26 quad containing a unit-square position.
    pub fn from_unit(unit: &UnitPoint) -> Result<ZQuad> {
        validate_unit_point(unit)?;
        let scalar = interleave26(quantize(unit.lat), quantize(unit.lng));
        Ok(ZQuad::new_unchecked(scalar + bias(MAX_ZOOM), MAX_ZOOM))
    }

    /// Grid row and column of this quad at its own zoom.
    fn grid_position(&self) -> (u32, u32) {
        deinterleave52(self.scalar())
    }

    /// Midpoint position on a grid one level finer, with that grid's zoom.
    /// A zoom-26 quad has no finer grid, so its corner stands in.
    fn center_position(&self) -> (u64, u64, u8) {
        let (row, col) = self.grid_position();
        if self.zoom() < MAX_ZOOM {
            (2 * row as u64 + 1, 2 * col as u64 + 1, self.zoom() + 1)
        } else {
            (row as u64, col as u64, self.zoom())
        }
    }

    pub fn center_unit_lat(&self) -> f64 {
        let (row, _, zoom) = self.center_position();
        row as f64 / scale(zoom)
    }

    pub fn center_unit_lng(&self) -> f64 {
        let (_, col, zoom) = self.center_position();
        col as f64 / scale(zoom)
    }

    /// Unit latitude of the north-west corner.
    pub fn corner_unit_lat(&self) -> f64 {
        self.grid_position().0 as f64 / scale(self.zoom())
    }

    /// Unit longitude of the north-west corner.
    pub fn corner_unit_lng(&self) -> f64 {
        self.grid_position().1 as f64 / scale(self.zoom())
    }

    pub fn center_unit(&self) -> UnitPoint {
        UnitPoint::new(self.center_unit_lat(), self.center_unit_lng())
    }

    pub fn corner_unit(&self) -> UnitPoint {
        UnitPoint::new(self.corner_unit_lat(), self.corner_unit_lng())
    }

    pub fn center_lat(&self) -> f64 {
        Ordinate::LATITUDE.from_unit(self.center_unit_lat())
    }

    pub fn center_lng(&self) -> f64 {
        Ordinate::LONGITUDE.from_unit(self.center_unit_lng())
    }

    pub fn corner_lat(&self) -> f64 {
        Ordinate::LATITUDE.from_unit(self.corner_unit_lat())
    }

    pub fn corner_lng(&self) -> f64 {
        Ordinate::LONGITUDE.from_unit(self.corner_unit_lng())
    }

    /// East-west extent in degrees.
    pub fn width(&self) -> f64 {
        360.0 / scale(self.zoom())
    }

    /// North-south extent in degrees.
    pub fn height(&self) -> f64 {
        180.0 / scale(self.zoom())
    }

    /// The center as a `geo::Point` (x = longitude, y = latitude).
    pub fn center(&self) -> Point {
        Point::new(self.center_lng(), self.center_lat())
    }

    /// The area covered by this quad in unit-square coordinates.
    pub fn unit_bounds(&self) -> UnitRect {
        let extent = 1.0 / scale(self.zoom());
        UnitRect::from_corner(
            self.corner_unit_lat(),
            self.corner_unit_lng(),
            extent,
            extent,
        )
    }

    /// The area covered by this quad in degrees, from the north-west corner
    /// to `(corner_lat - height, corner_lng + width)`.
    ///
    /// ```
    /// use zquad::ZQuad;
    ///
    /// let north_west = ZQuad::from_value(1)?;
    /// let bounds = north_west.bounds();
    /// assert_eq!(bounds.min().x, -180.0);
    /// assert_eq!(bounds.min().y, 0.0);
    /// assert_eq!(bounds.max().x, 0.0);
    /// assert_eq!(bounds.max().y, 90.0);
    /// # Ok::<(), zquad::ZQuadError>(())
    /// ```
    pub fn bounds(&self) -> Rect {
        let lat = self.corner_lat();
        let lng = self.corner_lng();
        Rect::new(
            coord! { x: lng, y: lat - self.height() },
            coord! { x: lng + self.width(), y: lat },
        )
    }

    /// Whether a WGS84 position falls inside this quad.
    pub fn contains_point(&self, lat: f64, lng: f64) -> Result<bool> {
        let leaf = ZQuad::from_wgs84(lat, lng)?;
        Ok(self.is_ancestor_of(&leaf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(value: u64) -> ZQuad {
        ZQuad::from_value(value).unwrap()
    }

    #[test]
    fn test_origin_is_max_zoom() {
        let q = ZQuad::from_wgs84(0.0, 0.0).unwrap();
        assert_eq!(q.zoom(), MAX_ZOOM);
        assert_eq!(q.ancestor(MAX_ZOOM).unwrap(), ZQuad::ROOT);
        // Exactly on the center: south-east quadrant at zoom 1.
        assert_eq!(q.to_zoom(1).unwrap().value(), 4);
    }

    #[test]
    fn test_quadrants() {
        assert_eq!(ZQuad::from_wgs84(45.0, -90.0).unwrap().to_zoom(1).unwrap(), quad(1));
        assert_eq!(ZQuad::from_wgs84(45.0, 90.0).unwrap().to_zoom(1).unwrap(), quad(2));
        assert_eq!(ZQuad::from_wgs84(-45.0, -90.0).unwrap().to_zoom(1).unwrap(), quad(3));
        assert_eq!(ZQuad::from_wgs84(-45.0, 90.0).unwrap().to_zoom(1).unwrap(), quad(4));
    }

    #[test]
    fn test_far_edges_clamp() {
        let south_east = ZQuad::from_wgs84(-90.0, 180.0).unwrap();
        assert_eq!(south_east.zoom(), MAX_ZOOM);
        assert_eq!(south_east.to_zoom(1).unwrap(), quad(4));

        let north_west = ZQuad::from_wgs84(90.0, -180.0).unwrap();
        assert_eq!(north_west.scalar(), 0);
    }

    #[test]
    fn test_from_point_axis_order() {
        let point = Point::new(151.2093, -33.8688);
        assert_eq!(
            ZQuad::from_point(&point).unwrap(),
            ZQuad::from_wgs84(-33.8688, 151.2093).unwrap()
        );
        assert_eq!(ZQuad::from_point(&point).unwrap().to_zoom(1).unwrap(), quad(4));
        // Longitude 120 is fine on x but not as a latitude on y.
        assert!(ZQuad::from_point(&Point::new(10.0, 120.0)).is_err());
        assert!(ZQuad::from_point(&Point::new(120.0, 10.0)).is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(ZQuad::from_wgs84(91.0, 0.0).is_err());
        assert!(ZQuad::from_wgs84(0.0, f64::NAN).is_err());
        assert!(ZQuad::from_unit(&UnitPoint::new(1.5, 0.0)).is_err());
    }

    #[test]
    fn test_root_geometry() {
        let root = ZQuad::ROOT;
        assert_eq!(root.center_lat(), 0.0);
        assert_eq!(root.center_lng(), 0.0);
        assert_eq!(root.corner_lat(), 90.0);
        assert_eq!(root.corner_lng(), -180.0);
        assert_eq!(root.width(), 360.0);
        assert_eq!(root.height(), 180.0);
    }

    #[test]
    fn test_child_centers() {
        let nw = quad(1);
        assert_eq!(nw.center_lat(), 45.0);
        assert_eq!(nw.center_lng(), -90.0);

        let se = quad(4);
        assert_eq!(se.center_lat(), -45.0);
        assert_eq!(se.center_lng(), 90.0);
        assert_eq!(se.corner_lat(), 0.0);
        assert_eq!(se.corner_lng(), 0.0);
        assert_eq!(se.center(), Point::new(90.0, -45.0));
    }

    #[test]
    fn test_max_zoom_center_is_corner() {
        let q = ZQuad::from_wgs84(55.6761, 12.5683).unwrap();
        assert_eq!(q.center_unit(), q.corner_unit());
        assert!((q.center_lat() - 55.6761).abs() < 1e-5);
        assert!((q.center_lng() - 12.5683).abs() < 1e-5);
    }

    #[test]
    fn test_center_inside_bounds() {
        let leaf = ZQuad::from_wgs84(-33.8688, 151.2093).unwrap();
        for zoom in 0..MAX_ZOOM {
            let q = leaf.to_zoom(zoom).unwrap();
            assert!(q.unit_bounds().contains(&q.center_unit()));
            assert!(q.contains_point(-33.8688, 151.2093).unwrap());
            let bounds = q.bounds();
            assert!((bounds.width() - q.width()).abs() < 1e-9);
            assert!((bounds.height() - q.height()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_contains_point_outside() {
        assert!(!quad(1).contains_point(-45.0, 90.0).unwrap());
        assert!(quad(1).contains_point(45.0, -90.0).unwrap());
    }
}
