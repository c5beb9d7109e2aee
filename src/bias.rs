//! Zoom-biased linear indexing.
//!
//! Quads of every zoom level share one integer space. The bias of a zoom
//! level is the number of quads at all shallower levels, so level `z`
//! occupies `[bias(z), bias(z + 1))` and the ranges never overlap:
//!
//! ```text
//! zoom 0:  0
//! zoom 1:  1 ..= 4
//! zoom 2:  5 ..= 20
//! zoom 3: 21 ..= 84
//! ```

use crate::error::{Result, ZQuadError};

/// Deepest zoom level whose values still fit in 53 bits.
pub const MAX_ZOOM: u8 = 26;

static BIASES: [u64; MAX_ZOOM as usize + 2] = build_biases();

const fn build_biases() -> [u64; MAX_ZOOM as usize + 2] {
    let mut result = [0u64; MAX_ZOOM as usize + 2];
    let mut i = 1;
    while i < result.len() {
        result[i] = 4 * result[i - 1] + 1;
        i += 1;
    }
    result
}

/// One past the largest valid quad value, `bias(MAX_ZOOM + 1)`.
pub const VALUE_LIMIT: u64 = build_biases()[MAX_ZOOM as usize + 1];

/// The bias of zoom level `zoom`.
///
/// # Panics
///
/// If `zoom > MAX_ZOOM`.
///
/// ```
/// use zquad::bias::bias;
///
/// assert_eq!(bias(0), 0);
/// assert_eq!(bias(1), 1);
/// assert_eq!(bias(2), 5);
/// assert_eq!(bias(3), 21);
/// ```
#[inline]
pub fn bias(zoom: u8) -> u64 {
    assert!(zoom <= MAX_ZOOM, "zoom {} exceeds {}", zoom, MAX_ZOOM);
    BIASES[zoom as usize]
}

/// Number of quads at a single zoom level, `4^zoom`.
#[inline]
pub(crate) fn quads_at(zoom: u8) -> u64 {
    1u64 << (2 * zoom as u32)
}

/// The zoom level whose bias bracket contains `value`.
///
/// Values at or above [`VALUE_LIMIT`] have no zoom of their own and report
/// [`MAX_ZOOM`]; [`checked_zoom_of`] rejects them instead.
pub fn zoom_of(value: u64) -> u8 {
    if value == 0 {
        return 0;
    }
    (0..MAX_ZOOM)
        .find(|&n| value < BIASES[n as usize + 1])
        .unwrap_or(MAX_ZOOM)
}

/// Like [`zoom_of`] but fails for values outside every zoom level.
pub fn checked_zoom_of(value: u64) -> Result<u8> {
    if value >= VALUE_LIMIT {
        return Err(ZQuadError::InvalidQuad(value));
    }
    Ok(zoom_of(value))
}
