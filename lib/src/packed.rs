use crate::bits;
use crate::error::{Error, ErrorKind};
use crate::field::Field;

pub(crate) mod sealed {
    /// Raw access to the storage words of a packed container.
    pub trait Storage {
        /// Load the word at `index` in host order.
        fn load(&self, index: usize) -> u32;

        /// Store the word at `index` given in host order.
        fn store(&mut self, index: usize, word: u32);
    }
}

/// A fixed-size container of storage words, accessed through a table of
/// field descriptors.
///
/// Implemented for every header and flag container in this crate. Generated
/// per-field accessors read through [`Packed::get`], and raw integer fields
/// are written through [`Packed::set`].
pub trait Packed: 'static + Sized + Copy + sealed::Storage {
    /// The name of the container.
    const NAME: &'static str;
    /// The number of storage words.
    const WORDS: usize;
    /// The width of each storage word in bits.
    const WORD_BITS: u32;
    /// Every field of the container in declaration order.
    const FIELDS: &'static [Field<Self>];

    /// Get the raw bytes of the container as they appear on the wire.
    fn as_bytes(&self) -> &[u8];

    /// Get the storage word at `index` in host order.
    #[inline]
    fn word(&self, index: usize) -> Option<u32> {
        if index < Self::WORDS {
            Some(self.load(index))
        } else {
            None
        }
    }

    /// Look up a field by name.
    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::FIELDS.iter().find(|field| field.name() == name)
    }

    /// Read the raw value of `field`.
    #[inline]
    fn get(&self, field: &Field<Self>) -> u32 {
        bits::read(
            self.load(field.word()),
            Self::WORD_BITS,
            field.offset(),
            field.width(),
        )
    }

    /// Write the raw value of `field`.
    ///
    /// Fails if `value` does not fit in the width of the field, in which case
    /// the container is left unchanged.
    fn set(&mut self, field: &Field<Self>, value: u32) -> Result<(), Error> {
        let word = self.load(field.word());

        let Some(word) =
            bits::checked_insert(word, Self::WORD_BITS, field.offset(), field.width(), value)
        else {
            tracing::debug!(
                container = Self::NAME,
                field = field.name(),
                value,
                width = field.width(),
                "rejected value out of range"
            );

            return Err(Error::new(ErrorKind::OutOfRange {
                field: field.name(),
                value,
                width: field.width(),
            }));
        };

        tracing::trace!(container = Self::NAME, field = field.name(), value, "set field");
        self.store(field.word(), word);
        Ok(())
    }
}

/// A typed value stored in a field of exactly [`FieldValue::WIDTH`] bits.
///
/// Values of these types can only be constructed from raw bits that fit, so
/// writing them cannot fail.
pub(crate) trait FieldValue: Copy {
    /// The width of the value in bits.
    const WIDTH: u32;

    /// Construct from the low [`FieldValue::WIDTH`] bits of `bits`.
    fn from_bits(bits: u32) -> Self;

    /// Convert into raw bits.
    fn into_bits(self) -> u32;
}

/// Write a value whose type already guarantees that it fits in `field`.
#[inline]
pub(crate) fn insert<P>(packed: &mut P, field: &Field<P>, value: u32)
where
    P: Packed,
{
    let word = bits::insert(
        packed.load(field.word()),
        P::WORD_BITS,
        field.offset(),
        field.width(),
        value,
    );

    packed.store(field.word(), word);
}

/// Construct a value type from a raw integer, validating that it fits.
pub(crate) fn checked_value<T>(name: &'static str, value: u32) -> Result<T, Error>
where
    T: FieldValue,
{
    if !bits::fits(value, T::WIDTH) {
        return Err(Error::new(ErrorKind::OutOfRange {
            field: name,
            value,
            width: T::WIDTH,
        }));
    }

    Ok(T::from_bits(value))
}
