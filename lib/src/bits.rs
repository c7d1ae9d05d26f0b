//! The bit-field accessor algorithm.
//!
//! Words are numbered the way protocol documents draw them: bit `0` is the
//! most significant bit of a word that is `word_bits` wide, so a field at
//! `offset` with `width` bits occupies the shift
//! `word_bits - width - offset`. Words are passed in host order, any byte
//! swapping happens where a word is loaded from or stored to its container.
//!
//! Callers are expected to uphold `width >= 1` and
//! `offset + width <= word_bits <= 32`, which every field table in this crate
//! checks at compile time through [`Layout::validate`].
//!
//! [`Layout::validate`]: crate::Layout::validate

/// Mask covering the low `width` bits.
///
/// A full-width mask is produced without shifting by the width of the word.
#[inline]
pub const fn mask(width: u32) -> u32 {
    if width >= u32::BITS {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

/// Test if `value` can be represented in a field of `width` bits.
#[inline]
pub const fn fits(value: u32, width: u32) -> bool {
    value <= mask(width)
}

#[inline]
const fn shift(word_bits: u32, offset: u32, width: u32) -> u32 {
    word_bits - width - offset
}

#[inline]
const fn is_whole_word(offset: u32, width: u32) -> bool {
    offset == 0 && width == u32::BITS
}

/// Read the field at `offset` with `width` bits out of `word`.
#[inline]
pub const fn read(word: u32, word_bits: u32, offset: u32, width: u32) -> u32 {
    if is_whole_word(offset, width) {
        return word;
    }

    (word >> shift(word_bits, offset, width)) & mask(width)
}

/// Write `value` into the field at `offset` with `width` bits of `word`,
/// returning the updated word.
///
/// Returns `None` if `value` does not fit in `width` bits. Bits outside of the
/// field are preserved.
#[inline]
pub const fn checked_insert(
    word: u32,
    word_bits: u32,
    offset: u32,
    width: u32,
    value: u32,
) -> Option<u32> {
    if !fits(value, width) {
        return None;
    }

    Some(insert(word, word_bits, offset, width, value))
}

/// Write the low `width` bits of `value` into the field at `offset` of `word`.
///
/// Only used for values whose type already guarantees that they fit.
#[inline]
pub(crate) const fn insert(word: u32, word_bits: u32, offset: u32, width: u32, value: u32) -> u32 {
    if is_whole_word(offset, width) {
        return value;
    }

    let shift = shift(word_bits, offset, width);
    let mask = mask(width);
    (word & !(mask << shift)) | ((value & mask) << shift)
}
