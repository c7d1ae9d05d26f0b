use core::fmt;

/// An error that can occur when reading or writing packed fields.
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    #[inline]
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Test if the error was raised because a value did not fit the width of
    /// the field it was written to.
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind, ErrorKind::OutOfRange { .. })
    }
}

impl fmt::Debug for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    OutOfRange {
        field: &'static str,
        value: u32,
        width: u32,
    },
    BufferSize {
        actual: usize,
        expected: usize,
    },
    BufferTooSmall {
        actual: usize,
        needed: usize,
    },
    BufferFull {
        capacity: usize,
        needed: usize,
    },
}

impl fmt::Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                width,
            } => {
                write!(
                    f,
                    "Value {value} does not fit in the {width}-bit field `{field}`"
                )
            }
            Self::BufferSize { actual, expected } => {
                write!(f, "Buffer of {actual} bytes, expected exactly {expected}")
            }
            Self::BufferTooSmall { actual, needed } => {
                write!(f, "Buffer {actual} too small for read up to byte {needed}")
            }
            Self::BufferFull { capacity, needed } => {
                write!(f, "Buffer capacity {capacity} too small for write up to byte {needed}")
            }
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn out_of_range_display() {
        let error = Error::new(ErrorKind::OutOfRange {
            field: "version",
            value: 16,
            width: 4,
        });

        assert!(error.is_out_of_range());
        assert_eq!(
            error.to_string(),
            "Value 16 does not fit in the 4-bit field `version`"
        );
    }

    #[test]
    fn buffer_errors_are_not_out_of_range() {
        let error = Error::from(ErrorKind::BufferTooSmall {
            actual: 4,
            needed: 20,
        });

        assert!(!error.is_out_of_range());
        assert_eq!(error.to_string(), "Buffer 4 too small for read up to byte 20");
    }
}
