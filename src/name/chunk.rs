//! Spelling a chunk (a quad at zoom 7 or shallower) as a four-letter token.
//!
//! Every chunk is first mapped onto the 128 x 128 level-7 grid. A zoom-7
//! chunk is its own grid cell; a shallower chunk is represented by the cell
//! at its center and flagged as *zoomed*. The grid is then cut up:
//!
//! - two **divisions** (west/east halves, 64 columns each), carried by
//!   letter order: vowel first in the west, consonant first in the east;
//! - six **sections** per division (2 columns of 32 x 3 rows of 44), the
//!   first vowel;
//! - four **blocks** per section (16 x 24), which together with one of five
//!   **regions** inside the block gives the first consonant;
//! - a **group** (second vowel) and **cell** (second consonant) looked up in
//!   the partition tables.
//!
//! The last section row is only 40 cells tall, so some spellings have no
//! grid cell and fail to decode.

use super::tables::{
    BLOCK_HEIGHT, BLOCK_WIDTH, CONSONANTS, VOWELS, block_slot, consonant_index,
    group_and_cell_at, is_consonant, redirected_chunk, redirected_name, region_at, vowel_index,
};
use crate::bias::bias;
use crate::bits::{compact32, spread16};
use crate::error::{Result, ZQuadError};
use crate::quad::ZQuad;

/// Zoom levels spelled by one token.
pub const CHUNK_ZOOM: u8 = 7;

/// Letters per token.
pub const TOKEN_LEN: usize = 4;

const DIVISION_WIDTH: u32 = 64;
const SECTION_WIDTH: u32 = 32;
const SECTION_HEIGHT: u32 = 44;
const LAST_SECTION_HEIGHT: u32 = 128 - 2 * SECTION_HEIGHT;

/// Scalar of the zoom-7 cell that represents a chunk.
///
/// For a shallower chunk this is the cell whose north-west corner is the
/// chunk's midpoint: its south-east child, then north-west children down to
/// zoom 7.
fn level7_center_scalar(chunk: &ZQuad) -> u64 {
    let scalar = chunk.scalar();
    if chunk.zoom() == CHUNK_ZOOM {
        return scalar;
    }
    let middle_child = 4 * scalar + 3;
    let zoom_delta = CHUNK_ZOOM - chunk.zoom();
    middle_child << (2 * (zoom_delta as u32 - 1))
}

/// Spell one chunk.
pub fn encode_chunk(chunk: &ZQuad) -> Result<String> {
    if chunk.zoom() > CHUNK_ZOOM {
        return Err(ZQuadError::NotAChunk(chunk.zoom()));
    }
    Ok(spell_chunk(chunk))
}

/// Callers guarantee `chunk.zoom() <= CHUNK_ZOOM`.
pub(crate) fn spell_chunk(chunk: &ZQuad) -> String {
    debug_assert!(chunk.zoom() <= CHUNK_ZOOM);
    if let Some(name) = redirected_name(chunk.value()) {
        return name.to_string();
    }

    let zoomed = chunk.zoom() < CHUNK_ZOOM;
    let scalar = level7_center_scalar(chunk) as u32;
    let mut x = compact32(scalar);
    let mut y = compact32(scalar >> 1);

    let eastern = x >= DIVISION_WIDTH;
    if eastern {
        x -= DIVISION_WIDTH;
    }

    let section = 2 * (y / SECTION_HEIGHT) + x / SECTION_WIDTH;
    x %= SECTION_WIDTH;
    y %= SECTION_HEIGHT;

    let block = x / BLOCK_WIDTH + 2 * (y / BLOCK_HEIGHT);
    x %= BLOCK_WIDTH;
    y %= BLOCK_HEIGHT;

    let region = region_at(x, y) as u32;
    let (group, cell) = group_and_cell_at(x, y);
    // Zoomed chunks take the otherwise unused consonant just below a
    // negative-marked cell.
    let cell = match (cell < 0, zoomed) {
        (true, true) => cell.unsigned_abs() - 1,
        _ => cell.unsigned_abs(),
    };

    let v0 = VOWELS[section as usize];
    let c0 = CONSONANTS[(5 * block + region) as usize];
    let v1 = VOWELS[group as usize];
    let c1 = CONSONANTS[cell as usize];
    let letters = if eastern {
        [c0, v0, c1, v1]
    } else {
        [v0, c0, v1, c1]
    };
    letters.iter().map(|&b| b as char).collect()
}

/// Read one token back into its chunk; `None` when the token spells nothing.
///
/// ```
/// use zquad::ZQuad;
/// use zquad::name::chunk::{decode_chunk, encode_chunk};
///
/// let chunk = ZQuad::from_value(6000)?;
/// let token = encode_chunk(&chunk)?;
/// assert_eq!(decode_chunk(&token), Some(chunk));
/// assert_eq!(decode_chunk("aaaa"), None);
/// # Ok::<(), zquad::ZQuadError>(())
/// ```
pub fn decode_chunk(token: &str) -> Option<ZQuad> {
    let bytes = token.as_bytes();
    if bytes.len() != TOKEN_LEN {
        return None;
    }
    if let Some(value) = redirected_chunk(token) {
        return ZQuad::from_value(value).ok();
    }

    let eastern = is_consonant(bytes[0]);
    let (c_off, v_off) = if eastern { (0, 1) } else { (1, 0) };
    let ic0 = consonant_index(bytes[c_off])?;
    let section = vowel_index(bytes[v_off])? as u32;
    let cell = consonant_index(bytes[c_off + 2])?;
    let group = vowel_index(bytes[v_off + 2])?;

    let block = (ic0 / 5) as u32;
    let region = ic0 % 5;
    let slot = block_slot(region, group, cell)?;

    let mut x = slot.index as u32 % BLOCK_WIDTH;
    let mut y = slot.index as u32 / BLOCK_WIDTH;
    x += BLOCK_WIDTH * (block % 2);
    y += BLOCK_HEIGHT * (block / 2);
    let section_row = section / 2;
    if y >= SECTION_HEIGHT || (section_row == 2 && y >= LAST_SECTION_HEIGHT) {
        return None;
    }
    x += SECTION_WIDTH * (section % 2);
    y += SECTION_HEIGHT * section_row;
    if eastern {
        x += DIVISION_WIDTH;
    }

    let scalar = (spread16(x) + 2 * spread16(y)) as u64;
    // The representative cell of a zoomed chunk is the south-east child
    // followed by north-west children, so the lowest level whose two bits
    // are both set tells how many levels were added.
    let zoom_delta = if slot.zoomed {
        (0..CHUNK_ZOOM)
            .find(|&i| (scalar >> (2 * i as u32)) & 3 == 3)
            .map_or(CHUNK_ZOOM, |i| i + 1)
    } else {
        0
    };

    let level7 = ZQuad::new_unchecked(scalar + bias(CHUNK_ZOOM), CHUNK_ZOOM);
    let chunk = level7.ancestor_unchecked(zoom_delta);
    if redirected_name(chunk.value()).is_some() {
        return None;
    }
    (level7_center_scalar(&chunk) == scalar).then_some(chunk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bias::quads_at;

    fn quad(value: u64) -> ZQuad {
        ZQuad::from_value(value).unwrap()
    }

    #[test]
    fn test_level7_center_scalar() {
        assert_eq!(level7_center_scalar(&quad(6000)), 6000 - bias(7));
        // The root's center is the south-east child's north-west corner.
        assert_eq!(level7_center_scalar(&ZQuad::ROOT), 3 << 12);
        assert_eq!(level7_center_scalar(&quad(1)), 3 << 10);
        assert_eq!(level7_center_scalar(&quad(bias(6))), 3);
    }

    #[test]
    fn test_encode_rejects_deep_quads() {
        assert_eq!(encode_chunk(&quad(bias(8))), Err(ZQuadError::NotAChunk(8)));
    }

    #[test]
    fn test_token_shape() {
        for value in (0..bias(8)).step_by(97) {
            let token = encode_chunk(&quad(value)).unwrap();
            assert_eq!(token.len(), TOKEN_LEN);
            let b = token.as_bytes();
            if is_consonant(b[0]) {
                assert!(is_consonant(b[2]));
                assert!(!is_consonant(b[1]) && !is_consonant(b[3]));
            } else {
                assert!(!is_consonant(b[2]));
                assert!(is_consonant(b[1]) && is_consonant(b[3]));
            }
        }
    }

    #[test]
    fn test_every_chunk_round_trips() {
        for value in 0..bias(8) {
            let chunk = quad(value);
            let token = encode_chunk(&chunk).unwrap();
            assert_eq!(decode_chunk(&token), Some(chunk), "token {}", token);
        }
    }

    #[test]
    fn test_redirections() {
        assert_eq!(encode_chunk(&quad(6107)).unwrap(), "anax");
        assert_eq!(decode_chunk("anax"), Some(quad(6107)));
        assert_eq!(encode_chunk(&quad(6160)).unwrap(), "anux");
        assert_eq!(encode_chunk(&quad(11758)).unwrap(), "raze");
        assert_eq!(decode_chunk("raze"), Some(quad(11758)));
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(decode_chunk(""), None);
        assert_eq!(decode_chunk("aba"), None);
        assert_eq!(decode_chunk("ababa"), None);
        assert_eq!(decode_chunk("abba"), None);
        assert_eq!(decode_chunk("ABAB"), None);
        assert_eq!(decode_chunk("a1a1"), None);
        // Four bytes but two characters.
        assert_eq!(decode_chunk("éé"), None);
    }

    #[test]
    fn test_decoded_zoom_is_a_chunk() {
        for value in (0..quads_at(7)).step_by(13) {
            let token = encode_chunk(&quad(bias(7) + value)).unwrap();
            let chunk = decode_chunk(&token).unwrap();
            assert!(chunk.zoom() <= CHUNK_ZOOM);
        }
    }
}
