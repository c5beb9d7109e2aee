//! Morton (Z-order) bit interleaving.
//!
//! Two coordinates are interleaved into one scalar by spreading each one out
//! over every other bit and or-ing the results together, one channel shifted
//! by one. The compact functions undo the spread for a single channel.
//!
//! Everything here is exact integer shift/mask arithmetic; 26-bit channels
//! interleave into 52-bit scalars, comfortably inside a `u64`.

/// Spread the low 16 bits of `n` over the even bit positions of a 32-bit word.
///
/// ```
/// use zquad::bits::spread16;
///
/// assert_eq!(spread16(0b1011), 0b1_00_01_01);
/// assert_eq!(spread16(0xFFFF), 0x5555_5555);
/// ```
#[inline]
pub fn spread16(n: u32) -> u32 {
    // 0000000000000000abcdefghijklmnop
    let r = ((n << 8) & 0x00FF_0000) | (n & 0x0000_00FF);
    // 00000000abcdefgh00000000ijklmnop
    let r = ((r << 4) & 0x0F00_0F00) | (r & 0x000F_000F);
    // 0000abcd0000efgh0000ijkl0000mnop
    let r = ((r << 2) & 0x3030_3030) | (r & 0x0303_0303);
    // 00ab00cd00ef00gh00ij00kl00mn00op
    ((r << 1) & 0x4444_4444) | (r & 0x1111_1111)
    // 0a0b0c0d0e0f0g0h0i0j0k0l0m0n0o0p
}

/// Spread the low 26 bits of `n` over the even bit positions of a 52-bit value.
#[inline]
pub fn spread26(n: u32) -> u64 {
    let high = spread16((n >> 16) & 0xFFFF) as u64;
    let low = spread16(n & 0xFFFF) as u64;
    (high << 32) | low
}

/// Gather the even bit positions of a 32-bit word into its low 16 bits.
/// Odd bits are ignored.
///
/// ```
/// use zquad::bits::{compact32, spread16};
///
/// assert_eq!(compact32(spread16(0xBEEF)), 0xBEEF);
/// assert_eq!(compact32(0xAAAA_AAAA), 0);
/// ```
#[inline]
pub fn compact32(n: u32) -> u32 {
    // 0a0b0c0d0e0f0g0h0i0j0k0l0m0n0o0p
    let r = ((n >> 1) & 0x2222_2222) | (n & 0x1111_1111);
    // 00ab00cd00ef00gh00ij00kl00mn00op
    let r = ((r >> 2) & 0x0C0C_0C0C) | (r & 0x0303_0303);
    // 0000abcd0000efgh0000ijkl0000mnop
    let r = ((r >> 4) & 0x00F0_00F0) | (r & 0x000F_000F);
    // 00000000abcdefgh00000000ijklmnop
    ((r >> 8) & 0x0000_FF00) | (r & 0x0000_00FF)
    // 0000000000000000abcdefghijklmnop
}

/// Gather the even bit positions of a 52-bit value into its low 26 bits.
#[inline]
pub fn compact52(n: u64) -> u32 {
    let high = compact32((n >> 32) as u32);
    let low = compact32(n as u32);
    (high << 16) | low
}

/// Interleave two 26-bit channels: `odd` takes the odd bit positions and
/// `even` the even ones.
#[inline]
pub fn interleave26(odd: u32, even: u32) -> u64 {
    (spread26(odd) << 1) | spread26(even)
}

/// Split a 52-bit scalar back into its `(odd, even)` channels.
#[inline]
pub fn deinterleave52(scalar: u64) -> (u32, u32) {
    (compact52(scalar >> 1), compact52(scalar))
}
