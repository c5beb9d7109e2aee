//! Pronounceable names for z-quads.
//!
//! A name is a run of four-letter tokens joined by `-`. Each token spells a
//! chunk of up to seven zoom levels; the deepest levels are peeled off first,
//! so every token but the last covers a full seven levels:
//!
//! ```text
//! zoom  0..=7   one token
//! zoom  8..=14  two tokens
//! zoom 15..=21  three tokens
//! zoom 22..=26  four tokens
//! ```

pub mod chunk;
pub mod tables;

use crate::error::{Result, ZQuadError};
use crate::quad::ZQuad;
use chunk::{CHUNK_ZOOM, decode_chunk, encode_chunk, spell_chunk};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Separator between tokens of a name.
pub const SEPARATOR: char = '-';

/// Zoom levels spelled by the next token when `zoom` levels remain.
fn next_chunk_zoom(zoom: u8) -> u8 {
    match zoom % CHUNK_ZOOM {
        0 => zoom.min(CHUNK_ZOOM),
        partial => partial,
    }
}

impl ZQuad {
    /// Spell this quad as a single token.
    ///
    /// Only quads at zoom 7 or shallower fit in one token.
    pub fn chunk_name(&self) -> Result<String> {
        encode_chunk(self)
    }

    /// The hyphenated name of this quad.
    ///
    /// ```
    /// use zquad::ZQuad;
    ///
    /// let quad = ZQuad::from_wgs84(55.6761, 12.5683)?;
    /// let name = quad.name();
    /// assert_eq!(name.split('-').count(), 4);
    /// assert_eq!(ZQuad::from_name(&name), Some(quad));
    /// # Ok::<(), zquad::ZQuadError>(())
    /// ```
    pub fn name(&self) -> String {
        let mut tokens: SmallVec<[String; 4]> = SmallVec::new();
        let mut current = *self;
        loop {
            let chunk_zoom = next_chunk_zoom(current.zoom());
            let chunk = current.descendancy_unchecked(chunk_zoom);
            current = current.ancestor_unchecked(chunk_zoom);
            tokens.push(spell_chunk(&chunk));
            if current.is_root() {
                break;
            }
        }
        tokens.reverse();
        tokens.join("-")
    }

    /// Parse a hyphenated name. `None` if any token is malformed or spells
    /// nothing, or if the combined zoom would exceed the maximum.
    pub fn from_name(name: &str) -> Option<ZQuad> {
        name.split(SEPARATOR)
            .try_fold(ZQuad::ROOT, |quad, token| {
                let chunk = decode_chunk(token)?;
                quad.descendant(&chunk).ok()
            })
    }
}

impl fmt::Display for ZQuad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for ZQuad {
    type Err = ZQuadError;

    fn from_str(s: &str) -> Result<Self> {
        ZQuad::from_name(s).ok_or_else(|| ZQuadError::InvalidName(s.to_string()))
    }
}
