//! Bit-range extraction over 32-bit register words.

/// Extract the inclusive bit range `[lo, hi]` from `value`, right-justified.
/// Bit 0 is the least significant bit. Valid for the full 0..=31 range;
/// `field(v, 0, 31)` returns `v` unchanged without shifting overflow.
#[inline]
pub const fn field(value: u32, lo: u32, hi: u32) -> u32 {
    debug_assert!(lo <= hi && hi < 32);
    let width = hi - lo + 1;
    let mask = if width == 32 { u32::MAX } else { (1 << width) - 1 };
    (value >> lo) & mask
}

/// True when bit `position` of `value` is set.
#[inline]
pub const fn bit(value: u32, position: u32) -> bool {
    (value >> position) & 1 != 0
}

/// Number of bits needed to represent positions `0..count`, i.e.
/// `ceil(log2(count))`. Zero for counts of 0 or 1.
#[inline]
pub const fn width_of(count: u32) -> u32 {
    if count <= 1 {
        0
    } else {
        32 - (count - 1).leading_zeros()
    }
}
