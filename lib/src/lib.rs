//! Table-driven accessors for bit-packed protocol headers.
//!
//! Every header is a fixed array of 32-bit words in network byte order,
//! described by a table of [`Field`]s. Each field is read and written through
//! one generic algorithm in [`bits`], and writes which do not fit the width of
//! their field are rejected instead of truncated.
//!
//! ```
//! use wirefield::ip::{Flags, Fragment, v4};
//!
//! let mut flags = Flags::ZEROED;
//! flags.set_df(Fragment::DONT_FRAGMENT);
//!
//! let mut header = v4::Header::ZEROED;
//! header.set_version(4)?;
//! header.set_ihl(5)?;
//! header.set_flags(flags);
//! assert!(header.set_fragment_offset(0x2000).is_err());
//!
//! assert_eq!(&header.to_array()[..8], &[0x45, 0, 0, 0, 0, 0, 0x40, 0]);
//! # Ok::<_, wirefield::Error>(())
//! ```

#![allow(clippy::new_without_default)]

mod error;
pub use self::error::Error;

pub mod bits;

mod field;
pub use self::field::{Field, Layout, LayoutError};

mod packed;
pub use self::packed::Packed;

mod buf;
pub use self::buf::{Aligned, Buffer};

mod macros;

pub mod ip;
pub mod tcp;
pub mod udp;
