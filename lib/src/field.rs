use core::fmt;
use core::marker::PhantomData;

/// Describes where a single field lives inside of the packed container `H`.
///
/// The offset is counted from the most significant bit of the storage word
/// the field lives in.
pub struct Field<H> {
    name: &'static str,
    word: usize,
    offset: u32,
    width: u32,
    _marker: PhantomData<fn() -> H>,
}

impl<H> Field<H> {
    pub(crate) const fn new(name: &'static str, word: usize, offset: u32, width: u32) -> Self {
        Self {
            name,
            word,
            offset,
            width,
            _marker: PhantomData,
        }
    }

    /// The name of the field.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The index of the storage word the field lives in.
    #[inline]
    pub const fn word(&self) -> usize {
        self.word
    }

    /// The bit offset of the field, counted from the most significant bit of
    /// its storage word.
    #[inline]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// The width of the field in bits.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// The largest value the field can hold.
    #[inline]
    pub const fn max(&self) -> u32 {
        crate::bits::mask(self.width)
    }

    #[inline]
    const fn end(&self) -> u32 {
        self.offset + self.width
    }

    const fn overlaps(&self, other: &Self) -> bool {
        self.word == other.word && self.offset < other.end() && other.offset < self.end()
    }
}

impl<H> Clone for Field<H> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for Field<H> {}

impl<H> fmt::Debug for Field<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("word", &self.word)
            .field("offset", &self.offset)
            .field("width", &self.width)
            .finish()
    }
}

/// An error in a table of field descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    /// The word width is zero or wider than 32 bits.
    WordBits { word_bits: u32 },
    /// A field has no bits.
    ZeroWidth { field: &'static str },
    /// A field extends past the end of its word.
    TooWide {
        field: &'static str,
        end: u32,
        word_bits: u32,
    },
    /// A field refers to a word that does not exist.
    WordOutOfBounds {
        field: &'static str,
        word: usize,
        words: usize,
    },
    /// Two fields share bits.
    Overlap {
        field: &'static str,
        other: &'static str,
    },
    /// A word has bits which are not claimed by any field.
    Gap { word: usize, covered: u32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordBits { word_bits } => {
                write!(f, "Word width {word_bits} must be between 1 and 32 bits")
            }
            Self::ZeroWidth { field } => write!(f, "Field `{field}` has no bits"),
            Self::TooWide {
                field,
                end,
                word_bits,
            } => write!(
                f,
                "Field `{field}` ends at bit {end} past the {word_bits}-bit word"
            ),
            Self::WordOutOfBounds { field, word, words } => write!(
                f,
                "Field `{field}` is in word {word} but there are only {words} words"
            ),
            Self::Overlap { field, other } => {
                write!(f, "Field `{field}` overlaps with field `{other}`")
            }
            Self::Gap { word, covered } => {
                write!(f, "Only {covered} bits of word {word} are covered by fields")
            }
        }
    }
}

impl core::error::Error for LayoutError {}

/// A table of field descriptors making up one packed container.
pub struct Layout<'a, H> {
    fields: &'a [Field<H>],
    words: usize,
    word_bits: u32,
}

impl<'a, H> Layout<'a, H> {
    /// Construct a layout of `words` storage words, each `word_bits` wide.
    pub const fn new(fields: &'a [Field<H>], words: usize, word_bits: u32) -> Self {
        Self {
            fields,
            words,
            word_bits,
        }
    }

    /// Validate the layout.
    ///
    /// Every field must fit inside of its word, no two fields may overlap, and
    /// every bit of every word must belong to exactly one field. Unused bits
    /// are expected to be declared as explicit padding or reserved fields.
    ///
    /// This is a `const fn` so that tables can be checked at compile time.
    pub const fn validate(&self) -> Result<(), LayoutError> {
        if self.word_bits == 0 || self.word_bits > u32::BITS {
            return Err(LayoutError::WordBits {
                word_bits: self.word_bits,
            });
        }

        let mut n = 0;

        while n < self.fields.len() {
            let field = &self.fields[n];

            if field.width == 0 {
                return Err(LayoutError::ZeroWidth { field: field.name });
            }

            if field.end() > self.word_bits {
                return Err(LayoutError::TooWide {
                    field: field.name,
                    end: field.end(),
                    word_bits: self.word_bits,
                });
            }

            if field.word >= self.words {
                return Err(LayoutError::WordOutOfBounds {
                    field: field.name,
                    word: field.word,
                    words: self.words,
                });
            }

            let mut m = n + 1;

            while m < self.fields.len() {
                let other = &self.fields[m];

                if field.overlaps(other) {
                    return Err(LayoutError::Overlap {
                        field: field.name,
                        other: other.name,
                    });
                }

                m += 1;
            }

            n += 1;
        }

        // With overlaps ruled out, a word is fully covered when the widths of
        // its fields add up to the word width.
        let mut word = 0;

        while word < self.words {
            let mut covered = 0;
            let mut n = 0;

            while n < self.fields.len() {
                if self.fields[n].word == word {
                    covered += self.fields[n].width;
                }

                n += 1;
            }

            if covered != self.word_bits {
                return Err(LayoutError::Gap { word, covered });
            }

            word += 1;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, Layout, LayoutError};

    enum Test {}

    const fn field(name: &'static str, word: usize, offset: u32, width: u32) -> Field<Test> {
        Field::new(name, word, offset, width)
    }

    #[test]
    fn valid_layout() {
        let fields = [
            field("a", 0, 0, 4),
            field("b", 0, 4, 12),
            field("c", 0, 16, 16),
            field("d", 1, 0, 32),
        ];

        assert_eq!(Layout::new(&fields, 2, 32).validate(), Ok(()));
    }

    #[test]
    fn field_order_does_not_matter() {
        let fields = [field("low", 0, 2, 1), field("high", 0, 0, 2)];
        assert_eq!(Layout::new(&fields, 1, 3).validate(), Ok(()));
    }

    #[test]
    fn overlap() {
        let fields = [field("a", 0, 0, 8), field("b", 0, 7, 25)];

        assert_eq!(
            Layout::new(&fields, 1, 32).validate(),
            Err(LayoutError::Overlap {
                field: "a",
                other: "b"
            })
        );
    }

    #[test]
    fn too_wide() {
        let fields = [field("a", 0, 4, 5)];

        assert_eq!(
            Layout::new(&fields, 1, 8).validate(),
            Err(LayoutError::TooWide {
                field: "a",
                end: 9,
                word_bits: 8
            })
        );
    }

    #[test]
    fn zero_width() {
        let fields = [field("a", 0, 0, 0)];

        assert_eq!(
            Layout::new(&fields, 1, 8).validate(),
            Err(LayoutError::ZeroWidth { field: "a" })
        );
    }

    #[test]
    fn word_out_of_bounds() {
        let fields = [field("a", 0, 0, 32), field("b", 1, 0, 32)];

        assert_eq!(
            Layout::new(&fields, 1, 32).validate(),
            Err(LayoutError::WordOutOfBounds {
                field: "b",
                word: 1,
                words: 1
            })
        );
    }

    #[test]
    fn gap() {
        let fields = [field("a", 0, 0, 16), field("b", 0, 20, 12)];

        assert_eq!(
            Layout::new(&fields, 1, 32).validate(),
            Err(LayoutError::Gap {
                word: 0,
                covered: 28
            })
        );
    }

    #[test]
    fn word_bits() {
        let fields = [field("a", 0, 0, 32)];

        assert_eq!(
            Layout::new(&fields, 1, 33).validate(),
            Err(LayoutError::WordBits { word_bits: 33 })
        );
    }
}
