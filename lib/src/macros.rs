/// Define named constants over a narrow raw value.
macro_rules! __define_values {
    (
        impl $ty:ident: $width:literal {
            $(
                #[doc = $doc:literal]
                $name:ident = $value:expr;
            )*
        }
    ) => {
        impl $ty {
            $(
                #[doc = $doc]
                pub const $name: Self = Self($value);
            )*

            /// Construct an instance from the given raw value.
            ///
            /// Fails if the value does not fit in the width of the field.
            #[inline]
            pub fn new(value: u8) -> Result<Self, $crate::Error> {
                $crate::packed::checked_value(stringify!($ty), u32::from(value))
            }

            /// Get the raw value.
            #[inline]
            pub const fn get(self) -> u8 {
                self.0
            }
        }

        impl $crate::packed::FieldValue for $ty {
            const WIDTH: u32 = $width;

            #[inline]
            fn from_bits(bits: u32) -> Self {
                Self((bits & $crate::bits::mask($width)) as u8)
            }

            #[inline]
            fn into_bits(self) -> u32 {
                u32::from(self.0)
            }
        }

        impl fmt::Display for $ty {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match *self {
                    $(Self::$name => f.write_str($doc.trim_start()),)*
                    _ => write!(f, "Unknown value: {}", self.0),
                }
            }
        }

        impl fmt::Debug for $ty {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match *self {
                    $(Self::$name => write!(f, stringify!($name)),)*
                    _ => write!(f, "UNKNOWN({})", self.0),
                }
            }
        }
    };
}

pub(crate) use __define_values as define_values;

/// Define a header container made up of 32-bit words in network byte order.
///
/// Each field is declared as:
///
/// ```text
/// CONST => kind getter, setter: Type = [word, offset, width];
/// ```
///
/// Where `kind` is one of:
/// * `raw` for plain unsigned integers, setting them validates the width.
/// * `flag` for single bit booleans.
/// * `view` for typed values which are guaranteed to fit the field.
macro_rules! __define_header {
    (
        $(#[doc = $struct_doc:literal])*
        pub struct $ty:ident[$words:literal] {
            $(
                $(#[doc = $doc:literal])*
                $konst:ident => $kind:ident $get:ident, $set:ident: $field_ty:ty = [$word:literal, $offset:literal, $width:literal];
            )*
        }
    ) => {
        $(#[doc = $struct_doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(transparent)]
        pub struct $ty {
            words: [[u8; 4]; $words],
        }

        impl $ty {
            /// A header with all fields set to zero.
            pub const ZEROED: Self = Self {
                words: [[0; 4]; $words],
            };
            /// The size of the header in bytes.
            pub const SIZE: usize = $words * 4;

            $(
                $(#[doc = $doc])*
                pub const $konst: $crate::Field<Self> =
                    $crate::Field::new(stringify!($get), $word, $offset, $width);
            )*

            /// Read the given array as a header.
            pub const fn from_array(buffer: [u8; Self::SIZE]) -> Self {
                let mut words = [[0; 4]; $words];
                let mut n = 0;

                while n < Self::SIZE {
                    words[n / 4][n % 4] = buffer[n];
                    n += 1;
                }

                Self { words }
            }

            /// Read the given slice as a header.
            ///
            /// The slice must be exactly [`Self::SIZE`] bytes long.
            pub fn from_slice(bytes: &[u8]) -> Result<Self, $crate::Error> {
                let Ok(buffer) = <[u8; Self::SIZE]>::try_from(bytes) else {
                    return Err($crate::Error::new($crate::error::ErrorKind::BufferSize {
                        actual: bytes.len(),
                        expected: Self::SIZE,
                    }));
                };

                Ok(Self::from_array(buffer))
            }

            /// Copy the header into an array.
            pub fn to_array(&self) -> [u8; Self::SIZE] {
                let mut buffer = [0; Self::SIZE];
                buffer.copy_from_slice(self.words.as_flattened());
                buffer
            }

            $(
                $crate::macros::accessor! {
                    $kind $konst, $get, $set, $field_ty, $width;
                    $(#[doc = $doc])*
                }
            )*
        }

        impl $crate::packed::sealed::Storage for $ty {
            #[inline]
            fn load(&self, index: usize) -> u32 {
                u32::from_be_bytes(self.words[index])
            }

            #[inline]
            fn store(&mut self, index: usize, word: u32) {
                self.words[index] = word.to_be_bytes();
            }
        }

        impl $crate::Packed for $ty {
            const NAME: &'static str = stringify!($ty);
            const WORDS: usize = $words;
            const WORD_BITS: u32 = u32::BITS;
            const FIELDS: &'static [$crate::Field<Self>] = &[$(Self::$konst),*];

            #[inline]
            fn as_bytes(&self) -> &[u8] {
                self.words.as_flattened()
            }
        }

        // SAFETY: The header is a transparent wrapper around a byte array, so it
        // has an alignment of 1 and every bit pattern is valid.
        unsafe impl $crate::Aligned for $ty {}

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($ty))
                    $(.field(stringify!($get), &self.$get()))*
                    .finish()
            }
        }

        const _: () = assert!(
            $crate::Layout::new(<$ty as $crate::Packed>::FIELDS, $words, u32::BITS)
                .validate()
                .is_ok(),
            concat!("invalid field layout for ", stringify!($ty))
        );
    };
}

pub(crate) use __define_header as define_header;

/// Define a container stored in a single byte, which holds a word narrower than
/// or equal to 8 bits.
///
/// Fields are declared the same way as with `define_header!`, with a word index
/// which is always zero.
macro_rules! __define_bits {
    (
        $(#[doc = $struct_doc:literal])*
        pub struct $ty:ident: $bits:literal {
            $(
                $(#[doc = $doc:literal])*
                $konst:ident => $kind:ident $get:ident, $set:ident: $field_ty:ty = [$word:literal, $offset:literal, $width:literal];
            )*
        }
    ) => {
        $(#[doc = $struct_doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(transparent)]
        pub struct $ty(u8);

        impl $ty {
            /// A value with all fields set to zero.
            pub const ZEROED: Self = Self(0);

            $(
                $(#[doc = $doc])*
                pub const $konst: $crate::Field<Self> =
                    $crate::Field::new(stringify!($get), $word, $offset, $width);
            )*

            /// Construct from a raw value.
            ///
            /// Fails if the value has bits set outside of the word.
            #[inline]
            pub fn new(value: u8) -> Result<Self, $crate::Error> {
                $crate::packed::checked_value(stringify!($ty), u32::from(value))
            }

            /// Get the raw value.
            #[inline]
            pub const fn raw(self) -> u8 {
                self.0
            }

            $(
                $crate::macros::accessor! {
                    $kind $konst, $get, $set, $field_ty, $width;
                    $(#[doc = $doc])*
                }
            )*
        }

        impl $crate::packed::sealed::Storage for $ty {
            #[inline]
            fn load(&self, _: usize) -> u32 {
                u32::from(self.0)
            }

            #[inline]
            fn store(&mut self, _: usize, word: u32) {
                self.0 = (word & $crate::bits::mask($bits)) as u8;
            }
        }

        impl $crate::Packed for $ty {
            const NAME: &'static str = stringify!($ty);
            const WORDS: usize = 1;
            const WORD_BITS: u32 = $bits;
            const FIELDS: &'static [$crate::Field<Self>] = &[$(Self::$konst),*];

            #[inline]
            fn as_bytes(&self) -> &[u8] {
                core::slice::from_ref(&self.0)
            }
        }

        impl $crate::packed::FieldValue for $ty {
            const WIDTH: u32 = $bits;

            #[inline]
            fn from_bits(bits: u32) -> Self {
                Self((bits & $crate::bits::mask($bits)) as u8)
            }

            #[inline]
            fn into_bits(self) -> u32 {
                u32::from(self.0)
            }
        }

        impl From<$ty> for u8 {
            #[inline]
            fn from(value: $ty) -> u8 {
                value.0
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($ty))
                    $(.field(stringify!($get), &self.$get()))*
                    .finish()
            }
        }

        const _: () = assert!($bits <= u8::BITS, "word does not fit in a byte");

        const _: () = assert!(
            $crate::Layout::new(<$ty as $crate::Packed>::FIELDS, 1, $bits)
                .validate()
                .is_ok(),
            concat!("invalid field layout for ", stringify!($ty))
        );
    };
}

pub(crate) use __define_bits as define_bits;

/// Generate the getter and setter for a single field.
macro_rules! __accessor {
    (raw $konst:ident, $get:ident, $set:ident, $field_ty:ty, $width:literal; $(#[doc = $doc:literal])*) => {
        $(#[doc = $doc])*
        #[inline]
        pub fn $get(&self) -> $field_ty {
            const { assert!($width <= <$field_ty>::BITS) };
            $crate::Packed::get(self, &Self::$konst) as $field_ty
        }

        #[doc = concat!("Set the `", stringify!($get), "` field.")]
        ///
        /// Fails if the value does not fit in the width of the field.
        #[inline]
        pub fn $set(&mut self, value: $field_ty) -> Result<(), $crate::Error> {
            $crate::Packed::set(self, &Self::$konst, u32::from(value))
        }
    };

    (flag $konst:ident, $get:ident, $set:ident, $field_ty:ty, $width:literal; $(#[doc = $doc:literal])*) => {
        $(#[doc = $doc])*
        #[inline]
        pub fn $get(&self) -> bool {
            const { assert!($width == 1) };
            $crate::Packed::get(self, &Self::$konst) != 0
        }

        #[doc = concat!("Set the `", stringify!($get), "` flag.")]
        #[inline]
        pub fn $set(&mut self, value: bool) {
            $crate::packed::insert(self, &Self::$konst, u32::from(value));
        }
    };

    (view $konst:ident, $get:ident, $set:ident, $field_ty:ty, $width:literal; $(#[doc = $doc:literal])*) => {
        $(#[doc = $doc])*
        #[inline]
        pub fn $get(&self) -> $field_ty {
            const { assert!(<$field_ty as $crate::packed::FieldValue>::WIDTH == $width) };
            let bits = $crate::Packed::get(self, &Self::$konst);
            <$field_ty as $crate::packed::FieldValue>::from_bits(bits)
        }

        #[doc = concat!("Set the `", stringify!($get), "` field.")]
        #[inline]
        pub fn $set(&mut self, value: $field_ty) {
            let bits = <$field_ty as $crate::packed::FieldValue>::into_bits(value);
            $crate::packed::insert(self, &Self::$konst, bits);
        }
    };
}

pub(crate) use __accessor as accessor;
