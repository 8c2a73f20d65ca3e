//! A Rust implementation of ULID, the Universally Unique Lexicographically
//! Sortable Identifier
//!
//! ```rust
//! use ulid::ulid;
//!
//! let x = ulid();
//! println!("{}", x); // e.g. "01ARZ3NDEKTSV4RRFFQ69G5FAV"
//! println!("{:?}", x.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See [the ULID Specification](https://github.com/ulid/spec).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |          randomness           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          randomness                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          randomness                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in
//!   milliseconds, stored most significant byte first.
//! - The remaining 80 `randomness` bits are filled with a cryptographically
//!   strong random number.
//!
//! The 16-byte layout sorts by generation time first and by the random bits
//! on ties, both as raw bytes and through the 26-character text form.
//!
//! # Text representation
//!
//! An identifier is formatted as 26 characters over the 32-symbol alphabet
//! `0123456789ABCDEFGHJKMNPQRSTVWXYZ` (I, L, O, and U are excluded): ten
//! characters for the timestamp followed by sixteen for the random bits.
//! Output is always uppercase; parsing accepts either case.
//!
//! ```rust
//! use ulid::Ulid;
//!
//! let x = "01ARZ3NDEKTSV4RRFFQ69G5FAV".parse::<Ulid>()?;
//! assert_eq!(x.unix_ts_ms(), 1469922850259);
//! assert_eq!(x.to_string(), "01arz3ndektsv4rrffq69g5fav".parse::<Ulid>()?.to_string());
//! # Ok::<(), ulid::Error>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` integrates the library with `std` and enables the system
//!   clock-based and string-based APIs.
//! - `global_gen` enables the process-wide default generator behind the
//!   [`ulid()`] and [`ulid_string()`] entry points.
//!
//! Optional features:
//!
//! - `serde` enables the serialization and deserialization of identifiers.
//! - `uuid` enables the conversion to and from `uuid::Uuid` values, reusing
//!   the 16-byte layout as is.

#![cfg_attr(not(feature = "std"), no_std)]

mod id;
pub use id::{Error, Ulid};

mod base32;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{ulid, ulid_string};
