//! The z-quad value type and quadtree navigation.
//!
//! A z-quad identifies one square of a recursive four-way subdivision of the
//! unit square. The first three zoom levels are numbered like this:
//!
//! ```text
//!       zoom = 0            zoom = 1            zoom = 2
//!   +---------------+   +-------+-------+   +---+---+---+---+
//!   |               |   |       |       |   | 5 | 6 | 9 | 10|
//!   |               |   |   1   |   2   |   +---+---+---+---+
//!   |               |   |       |       |   | 7 | 8 | 11| 12|
//!   |       0       |   +-------+-------+   +---+---+---+---+
//!   |               |   |       |       |   | 13| 14| 17| 18|
//!   |               |   |   3   |   4   |   +---+---+---+---+
//!   |               |   |       |       |   | 15| 16| 19| 20|
//!   +---------------+   +-------+-------+   +---+---+---+---+
//! ```
//!
//! Terminology:
//!
//! - the *scalar* of a quad is its value minus the bias of its zoom, so
//!   zoom 2 values 5..=20 have scalars 0..=15;
//! - the *ancestor* `n` levels up is the quad containing this one at
//!   `zoom - n`; 0, 3 and 14 are all ancestors of 14;
//! - the *descendancy* `n` levels deep is where this quad sits inside that
//!   ancestor, as a standalone quad at zoom `n`: the descendancy of 14
//!   inside 3 is 2;
//! - a *descendant* joins a quad with a relative quad, undoing the split.

use crate::bias::{MAX_ZOOM, VALUE_LIMIT, bias, checked_zoom_of, quads_at};
use crate::error::{Result, ZQuadError};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A cell of the quadtree: a value that is unique across every zoom level,
/// together with that zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawQuad")]
pub struct ZQuad {
    value: u64,
    zoom: u8,
}

#[derive(Deserialize)]
struct RawQuad {
    value: u64,
    zoom: u8,
}

impl TryFrom<RawQuad> for ZQuad {
    type Error = ZQuadError;

    fn try_from(raw: RawQuad) -> Result<Self> {
        ZQuad::new(raw.value, raw.zoom)
    }
}

impl ZQuad {
    /// The quad covering the whole globe.
    pub const ROOT: ZQuad = ZQuad { value: 0, zoom: 0 };

    /// Build a quad from its value and zoom, checking that the value falls in
    /// that zoom's bias bracket.
    pub fn new(value: u64, zoom: u8) -> Result<Self> {
        if zoom > MAX_ZOOM {
            return Err(ZQuadError::ZoomOutOfRange {
                zoom: MAX_ZOOM,
                requested: zoom,
            });
        }
        if value >= VALUE_LIMIT || checked_zoom_of(value)? != zoom {
            return Err(ZQuadError::InvalidQuad(value));
        }
        Ok(Self { value, zoom })
    }

    /// Build a quad from its value alone; the zoom is implied by the value.
    ///
    /// ```
    /// use zquad::ZQuad;
    ///
    /// let quad = ZQuad::from_value(14)?;
    /// assert_eq!(quad.zoom(), 2);
    /// # Ok::<(), zquad::ZQuadError>(())
    /// ```
    pub fn from_value(value: u64) -> Result<Self> {
        let zoom = checked_zoom_of(value)?;
        Ok(Self { value, zoom })
    }

    /// Callers guarantee `bias(zoom) <= value < bias(zoom + 1)`.
    pub(crate) const fn new_unchecked(value: u64, zoom: u8) -> Self {
        Self { value, zoom }
    }

    /// Build a quad at `zoom` from its scalar.
    pub(crate) fn from_scalar(scalar: u64, zoom: u8) -> Self {
        debug_assert!(scalar < quads_at(zoom));
        Self::new_unchecked(scalar + bias(zoom), zoom)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Position among the `4^zoom` quads of this zoom level.
    pub fn scalar(&self) -> u64 {
        self.value - bias(self.zoom)
    }

    pub fn is_root(&self) -> bool {
        self.value == 0
    }

    fn check_depth(&self, n: u8) -> Result<()> {
        if n > self.zoom {
            return Err(ZQuadError::ZoomOutOfRange {
                zoom: self.zoom,
                requested: n,
            });
        }
        Ok(())
    }

    /// The quad `n` levels up. `ancestor(0)` is the quad itself.
    ///
    /// ```
    /// use zquad::ZQuad;
    ///
    /// let quad = ZQuad::from_value(14)?;
    /// assert_eq!(quad.ancestor(1)?.value(), 3);
    /// assert_eq!(quad.ancestor(2)?, ZQuad::ROOT);
    /// assert!(quad.ancestor(3).is_err());
    /// # Ok::<(), zquad::ZQuadError>(())
    /// ```
    pub fn ancestor(&self, n: u8) -> Result<ZQuad> {
        self.check_depth(n)?;
        Ok(self.ancestor_unchecked(n))
    }

    pub(crate) fn ancestor_unchecked(&self, n: u8) -> ZQuad {
        debug_assert!(n <= self.zoom);
        ZQuad {
            value: (self.value - bias(n)) >> (2 * n as u32),
            zoom: self.zoom - n,
        }
    }

    /// The bottom `n` levels of this quad's path, as a quad at zoom `n`.
    pub fn descendancy(&self, n: u8) -> Result<ZQuad> {
        self.check_depth(n)?;
        Ok(self.descendancy_unchecked(n))
    }

    pub(crate) fn descendancy_unchecked(&self, n: u8) -> ZQuad {
        debug_assert!(n <= self.zoom);
        let scalar = (self.value - bias(n)) & (quads_at(n) - 1);
        ZQuad::from_scalar(scalar, n)
    }

    /// Append a relative quad below this one; `sub.zoom()` counts the extra
    /// levels.
    ///
    /// ```
    /// use zquad::ZQuad;
    ///
    /// let quad = ZQuad::from_value(14)?;
    /// let rebuilt = quad.ancestor(1)?.descendant(&quad.descendancy(1)?)?;
    /// assert_eq!(rebuilt, quad);
    /// # Ok::<(), zquad::ZQuadError>(())
    /// ```
    pub fn descendant(&self, sub: &ZQuad) -> Result<ZQuad> {
        let zoom = self.zoom + sub.zoom;
        if zoom > MAX_ZOOM {
            return Err(ZQuadError::ZoomOutOfRange {
                zoom: self.zoom,
                requested: zoom,
            });
        }
        Ok(ZQuad {
            value: self.value * quads_at(sub.zoom) + sub.value,
            zoom,
        })
    }

    /// The ancestor at zoom `z`. Zooming in is not possible without finer
    /// coordinates, so `z > zoom` is an error; see [`ZQuad::clamp_to_zoom`].
    pub fn to_zoom(&self, z: u8) -> Result<ZQuad> {
        if z > self.zoom {
            return Err(ZQuadError::ZoomOutOfRange {
                zoom: self.zoom,
                requested: z,
            });
        }
        Ok(self.ancestor_unchecked(self.zoom - z))
    }

    /// The ancestor at zoom `z`, or the quad itself when `z >= zoom`.
    pub fn clamp_to_zoom(&self, z: u8) -> ZQuad {
        if z >= self.zoom {
            *self
        } else {
            self.ancestor_unchecked(self.zoom - z)
        }
    }

    /// The containing quad one level up, `None` for the root.
    pub fn parent(&self) -> Option<ZQuad> {
        (self.zoom > 0).then(|| self.ancestor_unchecked(1))
    }

    /// The four quads one level down in scalar order (north-west, north-east,
    /// south-west, south-east), `None` at [`MAX_ZOOM`].
    pub fn children(&self) -> Option<[ZQuad; 4]> {
        if self.zoom >= MAX_ZOOM {
            return None;
        }
        let first = self.value * 4 + 1;
        Some(std::array::from_fn(|i| ZQuad {
            value: first + i as u64,
            zoom: self.zoom + 1,
        }))
    }

    /// Whether `other` is this quad or lies inside it.
    pub fn is_ancestor_of(&self, other: &ZQuad) -> bool {
        self.zoom <= other.zoom && other.ancestor_unchecked(other.zoom - self.zoom) == *self
    }

    /// The deepest quad containing both `self` and `other`.
    ///
    /// ```
    /// use zquad::ZQuad;
    ///
    /// let a = ZQuad::from_value(14)?;
    /// let b = ZQuad::from_value(16)?;
    /// assert_eq!(a.least_common_ancestor(&b).value(), 3);
    /// # Ok::<(), zquad::ZQuadError>(())
    /// ```
    pub fn least_common_ancestor(&self, other: &ZQuad) -> ZQuad {
        let zoom = self.zoom.min(other.zoom);
        let a = self.clamp_to_zoom(zoom);
        let b = other.clamp_to_zoom(zoom);
        // Scalars interleave two bits per level, so the highest differing bit
        // tells how many levels to climb.
        let highest_difference = 64 - (a.scalar() ^ b.scalar()).leading_zeros();
        a.ancestor_unchecked(highest_difference.div_ceil(2) as u8)
    }

    /// The child of this quad that contains `descendant`.
    pub fn child_toward(&self, descendant: &ZQuad) -> Result<ZQuad> {
        if descendant.zoom <= self.zoom || !self.is_ancestor_of(descendant) {
            return Err(ZQuadError::InvalidInput(format!(
                "quad {} is not a strict descendant of quad {}",
                descendant.value, self.value
            )));
        }
        Ok(descendant.ancestor_unchecked(descendant.zoom - self.zoom - 1))
    }

    /// Values of every descendant at zoom `zoom`, which are contiguous.
    ///
    /// ```
    /// use zquad::ZQuad;
    ///
    /// let quad = ZQuad::from_value(3)?;
    /// assert_eq!(quad.descendant_range(2)?, 13..17);
    /// # Ok::<(), zquad::ZQuadError>(())
    /// ```
    pub fn descendant_range(&self, zoom: u8) -> Result<Range<u64>> {
        if zoom < self.zoom || zoom > MAX_ZOOM {
            return Err(ZQuadError::ZoomOutOfRange {
                zoom: self.zoom,
                requested: zoom,
            });
        }
        let depth = zoom - self.zoom;
        let start = self.value * quads_at(depth) + bias(depth);
        Ok(start..start + quads_at(depth))
    }
}
