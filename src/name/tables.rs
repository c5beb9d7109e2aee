//! Fixed partition tables for the chunk name codec.
//!
//! A 16 x 24 block of the level-7 grid is split into five regions, and each
//! region into up to six groups of up to twenty cells. The partition is
//! irregular and is carried as literal data; existing names depend on every
//! entry. A negative cell index marks a slot that also has a "zoomed"
//! spelling one consonant lower, used by chunks shallower than zoom 7.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

pub const VOWELS: &[u8; 6] = b"aeiouy";
pub const CONSONANTS: &[u8; 20] = b"bcdfghjklmnpqrstvwxz";

pub const BLOCK_WIDTH: u32 = 16;
pub const BLOCK_HEIGHT: u32 = 24;

/// Region of each 4x4 sub-block of a block, by `[y / 4][x / 4]`.
pub const REGION5S: [[u8; 4]; 6] = [
    [0, 0, 1, 1],
    [0, 0, 1, 1],
    [0, 2, 2, 1],
    [3, 2, 2, 4],
    [3, 3, 4, 4],
    [3, 3, 4, 4],
];

/// Which cell shape covers each 4x4 sub-block, by `[y / 4][x / 4]`.
///
/// ```text
///   0 0 0 0   1 1 1 1   0 0 0 0   1 1 1 1
///   0 0 0 0   1 1 1 1   0 0 0 0   1 1 1 1
///   0 0 0 2   2 1 1 1   0 0 0 2   2 1 1 1
///   0 0 2 2   2 2 1 1   0 0 2 2   2 2 1 1
///
///   3 3 2 2   2 2 4 4   3 3 2 2   2 2 4 4
///   3 3 3 2   2 4 4 4   3 3 3 2   2 4 4 4
///   3 3 3 3   4 4 4 4   3 3 3 3   4 4 4 4
///   3 3 3 3   4 4 4 4   3 3 3 3   4 4 4 4
///
///   3 5 5 5   0 0 0 0   1 1 1 1   4 5 5 5
///   5 5 5 5   0 0 0 0   1 1 1 1   5 5 5 5
///   5 5 5 5   0 0 0 2   2 1 1 1   5 5 5 5
///   5 5 5 5   0 0 2 2   2 2 1 1   5 5 5 5
///
///   5 5 5 5   3 3 2 2   2 2 4 4   5 5 5 5
///   5 5 5 5   3 3 3 2   2 4 4 4   5 5 5 5
///   5 5 5 5   3 3 3 3   4 4 4 4   5 5 5 5
///   5 5 5 0   3 3 3 3   4 4 4 4   5 5 5 1
///
///   0 0 0 0   1 1 1 1   0 0 0 0   1 1 1 1
///   0 0 0 0   1 1 1 1   0 0 0 0   1 1 1 1
///   0 0 0 2   2 1 1 1   0 0 0 2   2 1 1 1
///   0 0 2 2   2 2 1 1   0 0 2 2   2 2 1 1
///
///   3 3 2 2   2 2 4 4   3 3 2 2   2 2 4 4
///   3 3 3 2   2 4 4 4   3 3 3 2   2 4 4 4
///   3 3 3 3   4 4 4 4   3 3 3 3   4 4 4 4
///   3 3 3 3   4 4 4 4   3 3 3 3   4 4 4 4
/// ```
pub const GROUP6_SHAPES: [[u8; 4]; 6] = [
    [0, 1, 0, 1],
    [2, 3, 2, 3],
    [4, 0, 1, 5],
    [6, 2, 3, 7],
    [0, 1, 0, 1],
    [2, 3, 2, 3],
];

/// `(group, cell)` for each position of a 4x4 sub-block, by shape and then
/// `x % 4 + 4 * (y % 4)`.
#[rustfmt::skip]
pub const GROUP6_CELL20S: [[(u8, i8); 16]; 8] = [
    [
        (0, -1), (0, 2), (0, 3), (0, 4),
        (0, 5), (0, -7), (0, 8), (0, -10),
        (0, 11), (0, 12), (0, -14), (2, 0),
        (0, 15), (0, -17), (2, 2), (2, -4),
    ],
    [
        (1, -1), (1, 2), (1, 3), (1, 4),
        (1, 5), (1, -7), (1, 8), (1, -10),
        (2, 1), (1, 11), (1, -13), (1, 14),
        (2, 5), (2, -7), (1, 15), (1, -17),
    ],
    [
        (3, -1), (3, 2), (2, 8), (2, 9),
        (3, 3), (3, -5), (3, 6), (2, -14),
        (3, 7), (3, 8), (3, -10), (3, 11),
        (3, 12), (3, -14), (3, 15), (3, -17),
    ],
    [
        (2, -11), (2, 12), (4, 0), (4, 1),
        (2, 15), (4, -3), (4, 4), (4, -6),
        (4, 7), (4, 8), (4, -10), (4, 11),
        (4, 12), (4, -14), (4, 15), (4, -17),
    ],
    [
        (3, -19), (5, 0), (5, 1), (5, 2),
        (5, 3), (5, -5), (5, 6), (5, -8),
        (5, 9), (5, 10), (5, -12), (5, 13),
        (5, 14), (5, -16), (5, 17), (5, -19),
    ],
    [
        (4, -19), (5, 0), (5, 1), (5, 2),
        (5, 3), (5, -5), (5, 6), (5, -8),
        (5, 9), (5, 10), (5, -12), (5, 13),
        (5, 14), (5, -16), (5, 17), (5, -19),
    ],
    [
        (5, -1), (5, 2), (5, 3), (5, 4),
        (5, 5), (5, -7), (5, 8), (5, -10),
        (5, 11), (5, 12), (5, -14), (5, 15),
        (5, 16), (5, -18), (5, 19), (0, -19),
    ],
    [
        (5, -1), (5, 2), (5, 3), (5, 4),
        (5, 5), (5, -7), (5, 8), (5, -10),
        (5, 11), (5, 12), (5, -14), (5, 15),
        (5, 16), (5, -18), (5, 19), (1, -19),
    ],
];

/// Chunks whose systematic spelling is replaced by a fixed one.
pub const REDIRECTIONS: [(u64, &str); 3] = [(6107, "anax"), (6160, "anux"), (11758, "raze")];

/// Region of a position inside a block.
#[inline]
pub fn region_at(x: u32, y: u32) -> u8 {
    REGION5S[(y / 4) as usize][(x / 4) as usize]
}

/// Group and signed cell index of a position inside a block.
#[inline]
pub fn group_and_cell_at(x: u32, y: u32) -> (u8, i8) {
    let shape = GROUP6_SHAPES[(y / 4) as usize][(x / 4) as usize];
    GROUP6_CELL20S[shape as usize][((x % 4) + 4 * (y % 4)) as usize]
}

/// A position inside a block, recovered from a (region, group, cell) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSlot {
    /// `16 * y + x` inside the block.
    pub index: u16,
    /// Set when the spelling belongs to a chunk shallower than zoom 7.
    pub zoomed: bool,
}

const SLOT_COUNT: usize = 5 * 6 * 20;

fn slot_offset(region: u8, group: u8, cell: u8) -> usize {
    120 * region as usize + 20 * group as usize + cell as usize
}

static BLOCK_SLOTS: Lazy<[Option<BlockSlot>; SLOT_COUNT]> = Lazy::new(|| {
    let mut slots = [None; SLOT_COUNT];
    // Later positions overwrite earlier ones, so the x-major order matters.
    for x in 0..BLOCK_WIDTH {
        for y in 0..BLOCK_HEIGHT {
            let index = (BLOCK_WIDTH * y + x) as u16;
            let region = region_at(x, y);
            let (group, cell) = group_and_cell_at(x, y);
            let magnitude = cell.unsigned_abs();
            slots[slot_offset(region, group, magnitude)] = Some(BlockSlot {
                index,
                zoomed: false,
            });
            if cell < 0 {
                slots[slot_offset(region, group, magnitude - 1)] = Some(BlockSlot {
                    index,
                    zoomed: true,
                });
            }
        }
    }
    let filled = slots.iter().filter(|slot| slot.is_some()).count();
    log::debug!("built chunk slot table: {} of {} slots spelled", filled, SLOT_COUNT);
    slots
});

/// Inverse of [`region_at`] / [`group_and_cell_at`].
pub fn block_slot(region: u8, group: u8, cell: u8) -> Option<BlockSlot> {
    BLOCK_SLOTS[slot_offset(region, group, cell)]
}

static NAME_BY_CHUNK: Lazy<FxHashMap<u64, &'static str>> =
    Lazy::new(|| REDIRECTIONS.iter().copied().collect());

static CHUNK_BY_NAME: Lazy<FxHashMap<&'static str, u64>> = Lazy::new(|| {
    REDIRECTIONS
        .iter()
        .map(|&(chunk, name)| (name, chunk))
        .collect()
});

/// The fixed spelling of a redirected chunk value.
pub fn redirected_name(chunk: u64) -> Option<&'static str> {
    NAME_BY_CHUNK.get(&chunk).copied()
}

/// The chunk value a fixed spelling stands for.
pub fn redirected_chunk(name: &str) -> Option<u64> {
    CHUNK_BY_NAME.get(name).copied()
}

pub fn is_vowel(c: u8) -> bool {
    VOWELS.contains(&c)
}

pub fn is_consonant(c: u8) -> bool {
    CONSONANTS.contains(&c)
}

pub fn vowel_index(c: u8) -> Option<u8> {
    VOWELS.iter().position(|&v| v == c).map(|i| i as u8)
}

pub fn consonant_index(c: u8) -> Option<u8> {
    CONSONANTS.iter().position(|&v| v == c).map(|i| i as u8)
}
