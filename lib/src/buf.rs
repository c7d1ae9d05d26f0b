use core::cell::Cell;
use core::fmt;
use core::mem::{align_of, size_of};
use core::slice;

use crate::error::{Error, ErrorKind};

const MTU: usize = 1500;

/// Implement a type that can be accessed directly out of a buffer.
///
/// # Safety
///
/// Implementers guarantee that:
/// * The type has an alignment of 1.
/// * The type is `repr(transparent)` or `repr(C)` over bytes.
/// * The type can inhabit any bit patterns.
pub unsafe trait Aligned {}

unsafe impl<const N: usize> Aligned for [u8; N] {}

/// A buffer sized to the maximum transmission unit (MTU) which packed headers
/// can be written into and read back out of without copying.
pub struct Buffer<const N: usize = MTU> {
    /// Source buffer.
    buf: [u8; N],
    /// Position being read.
    at: Cell<usize>,
    /// Length that has been written.
    init: usize,
}

impl Buffer {
    /// Create a new MTU-sized buffer.
    pub fn new() -> Self {
        Self::with_capacity()
    }
}

impl<const N: usize> Buffer<N> {
    /// Create a new buffer with a capacity of `N` bytes.
    pub fn with_capacity() -> Self {
        Self {
            buf: [0; N],
            at: Cell::new(0),
            init: 0,
        }
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.at.set(0);
        self.init = 0;
    }

    /// Rewind the read position to the start of the buffer.
    pub fn rewind(&self) {
        self.at.set(0);
    }

    /// Get the number of bytes written to the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.init
    }

    /// Test if nothing has been written to the buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.init == 0
    }

    /// Get the remaining bytes which have not been read.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.get(self.at.get()..self.init).unwrap_or_default()
    }

    /// Get the number of bytes which can still be written.
    pub fn remaining_mut(&self) -> usize {
        N.saturating_sub(self.init)
    }

    /// Read a value of type T from the current read position.
    #[inline]
    pub fn read<T>(&self) -> Result<&T, Error>
    where
        T: Aligned,
    {
        const {
            assert!(align_of::<T>() == 1, "Header must be aligned to 1 byte");
        }

        let size = size_of::<T>();
        let end = self.at.get().wrapping_add(size);

        if self.init < end {
            tracing::debug!(init = self.init, end, "buffer too small for read");

            return Err(Error::new(ErrorKind::BufferTooSmall {
                actual: self.init,
                needed: end,
            }));
        }

        let ptr = self.buf.as_ptr().wrapping_add(self.at.get()).cast::<T>();
        self.at.set(end);
        // SAFETY: The range `at..end` is initialized and in bounds, and
        // `Aligned` guarantees that T has an alignment of 1 and accepts any bit
        // pattern.
        unsafe { Ok(&*ptr) }
    }

    /// Write a value of type T to the end of the buffer.
    #[inline]
    pub fn write<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: Aligned,
    {
        // SAFETY: `Aligned` types are plain bytes with no padding.
        let bytes =
            unsafe { slice::from_raw_parts((value as *const T).cast::<u8>(), size_of::<T>()) };

        self.extend_from_slice(bytes)
    }

    /// Extend the buffer by copying data from the given slice.
    pub fn extend_from_slice(&mut self, data: &[u8]) -> Result<(), Error> {
        let end = self.init.wrapping_add(data.len());

        let Some(target) = self.buf.get_mut(self.init..end) else {
            tracing::debug!(init = self.init, end, "buffer full");

            return Err(Error::new(ErrorKind::BufferFull {
                capacity: N,
                needed: end,
            }));
        };

        target.copy_from_slice(data);
        self.init = end;
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Buffer<N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_bytes().fmt(f)
    }
}
