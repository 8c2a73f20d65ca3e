#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, ops, str};

use crate::base32;

/// Represents a Universally Unique Lexicographically Sortable Identifier.
///
/// A value wraps the 16-byte binary layout: a 6-byte big-endian Unix
/// millisecond timestamp followed by 10 random bytes. The derived ordering
/// compares the timestamp first and the random part byte by byte on ties,
/// which coincides with the byte-wise order of the 26-character text form.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Ulid([u8; 16]);

impl Ulid {
    /// Empty ULID (00000000000000000000000000)
    pub const EMPTY: Self = Self([0x00; 16]);

    /// Max ULID (7ZZZZZZZZZZZZZZZZZZZZZZZZZ)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a fresh copy of the 16-byte binary representation.
    pub const fn to_bytes(&self) -> [u8; 16] {
        self.0
    }

    /// Creates a ULID from a Unix millisecond timestamp and a 10-byte random
    /// payload.
    ///
    /// Only the low 48 bits of `unix_ts_ms` are representable; higher bits
    /// are discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulid::Ulid;
    ///
    /// let x = Ulid::from_parts(
    ///     1469922850259,
    ///     [0xd6, 0x76, 0x4c, 0x61, 0xef, 0xb9, 0x93, 0x02, 0xbd, 0x5b],
    /// );
    /// assert_eq!(x.to_string(), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
    /// ```
    pub const fn from_parts(unix_ts_ms: u64, random: [u8; 10]) -> Self {
        Self([
            (unix_ts_ms >> 40) as u8,
            (unix_ts_ms >> 32) as u8,
            (unix_ts_ms >> 24) as u8,
            (unix_ts_ms >> 16) as u8,
            (unix_ts_ms >> 8) as u8,
            unix_ts_ms as u8,
            random[0],
            random[1],
            random[2],
            random[3],
            random[4],
            random[5],
            random[6],
            random[7],
            random[8],
            random[9],
        ])
    }

    /// Creates a ULID from a 16-byte binary representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless the slice is exactly 16 bytes
    /// long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match <[u8; 16]>::try_from(bytes) {
            Ok(e) => Ok(Self(e)),
            Err(_) => Err(Error::InvalidLength),
        }
    }

    /// Creates a ULID from a timestamp and random bytes drawn from `rng`.
    ///
    /// The generator is asked for exactly ten bytes; any failure inside it
    /// surfaces to the caller as is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] if `datetime` precedes the Unix
    /// epoch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::time::SystemTime;
    /// use ulid::Ulid;
    ///
    /// let x = Ulid::new(SystemTime::now(), &mut rand::thread_rng())?;
    /// assert_eq!(x.to_string().len(), 26);
    /// # Ok::<(), ulid::Error>(())
    /// ```
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn new<R: rand::RngCore>(
        datetime: std::time::SystemTime,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let mut random = [0u8; 10];
        rng.fill_bytes(&mut random);
        Self::from_datetime_random(datetime, &random)
    }

    /// Creates a ULID from a timestamp and a caller-supplied random payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] if `datetime` precedes the Unix
    /// epoch, or [`Error::InvalidRandomLength`] unless `random` is exactly
    /// ten bytes long.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn from_datetime_random(
        datetime: std::time::SystemTime,
        random: &[u8],
    ) -> Result<Self, Error> {
        let unix_ts_ms = datetime
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|_| Error::InvalidTimestamp)?
            .as_millis() as u64;
        match <[u8; 10]>::try_from(random) {
            Ok(random) => Ok(Self::from_parts(unix_ts_ms, random)),
            Err(_) => Err(Error::InvalidRandomLength),
        }
    }

    /// Returns the Unix millisecond timestamp encoded in the first six
    /// bytes, zero-extended to 64 bits.
    pub const fn unix_ts_ms(&self) -> u64 {
        (self.0[0] as u64) << 40
            | (self.0[1] as u64) << 32
            | (self.0[2] as u64) << 24
            | (self.0[3] as u64) << 16
            | (self.0[4] as u64) << 8
            | self.0[5] as u64
    }

    /// Returns the timestamp as a [`SystemTime`](std::time::SystemTime) with
    /// millisecond resolution.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn datetime(&self) -> std::time::SystemTime {
        std::time::UNIX_EPOCH + std::time::Duration::from_millis(self.unix_ts_ms())
    }

    /// Returns a copy of the 10-byte random part.
    pub const fn random(&self) -> [u8; 10] {
        [
            self.0[6], self.0[7], self.0[8], self.0[9], self.0[10], self.0[11], self.0[12],
            self.0[13], self.0[14], self.0[15],
        ]
    }

    /// Parses the 26-character representation, returning `Ulid::EMPTY` and
    /// `false` instead of an error when the input is not valid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulid::Ulid;
    ///
    /// let (x, ok) = Ulid::try_parse("01ARZ3NDEKTSV4RRFFQ69G5FAV");
    /// assert!(ok);
    /// assert_eq!(x.to_string(), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
    ///
    /// let (y, ok) = Ulid::try_parse("not a ulid");
    /// assert!(!ok);
    /// assert_eq!(y, Ulid::EMPTY);
    /// ```
    pub fn try_parse(src: &str) -> (Self, bool) {
        match src.parse() {
            Ok(e) => (e, true),
            Err(_) => (Self::EMPTY, false),
        }
    }

    /// Returns the 26-character representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and
    /// [`Display`](fmt::Display)ed.
    ///
    /// This method is primarily for `no_std` environments where
    /// heap-allocated string types are not readily available. Use the
    /// [`fmt::Display`] trait usually to get the canonical string
    /// representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulid::Ulid;
    ///
    /// let x = "01ARZ3NDEKTSV4RRFFQ69G5FAV".parse::<Ulid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "01ARZ3NDEKTSV4RRFFQ69G5FAV");
    /// assert_eq!(format!("{}", y), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
    /// # Ok::<(), ulid::Error>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        let mut buffer = [0u8; 26];
        buffer[..10].copy_from_slice(&base32::encode_time(&self.time_part()));
        buffer[10..].copy_from_slice(&base32::encode_random(&self.random()));
        debug_assert!(buffer.is_ascii());
        UlidStr(buffer)
    }

    /// Returns a copy of the 6-byte big-endian timestamp part.
    const fn time_part(&self) -> [u8; 6] {
        [
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5],
        ]
    }
}

impl fmt::Display for Ulid {
    /// Returns the 26-character canonical string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Ulid {
    type Err = Error;

    /// Creates an object from the 26-character string representation.
    ///
    /// Parsing is case-insensitive; the output of [`Ulid::encode`] is always
    /// uppercase.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        if src.is_empty() {
            return Err(Error::InvalidInput);
        }
        let src = src.as_bytes();
        if src.len() != 26 {
            return Err(Error::InvalidLength);
        }

        let time = base32::decode_time(&src[..10])?;
        let random = base32::decode_random(&src[10..])?;
        let mut dst = [0u8; 16];
        dst[..6].copy_from_slice(&time);
        dst[6..].copy_from_slice(&random);
        Ok(Self(dst))
    }
}

impl From<Ulid> for [u8; 16] {
    fn from(src: Ulid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Ulid {
    /// Reinterprets a 16-byte GUID-compatible value, preserving byte order.
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Ulid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Ulid> for u128 {
    fn from(src: Ulid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Ulid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// Concrete return type of [`Ulid::encode()`] containing the stack-allocated
/// 26-character string representation.
struct UlidStr([u8; 26]);

impl ops::Deref for UlidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UlidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// Error constructing or parsing a ULID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The text supplied to parse was empty.
    InvalidInput,

    /// The byte or character count did not match the fixed layout.
    InvalidLength,

    /// A character outside the base32 alphabet was encountered.
    InvalidCharacter,

    /// The timestamp precedes the Unix epoch.
    InvalidTimestamp,

    /// The random part was not exactly ten bytes long.
    InvalidRandomLength,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidInput => "empty input",
            Error::InvalidLength => "invalid length",
            Error::InvalidCharacter => "invalid character",
            Error::InvalidTimestamp => "timestamp precedes the epoch",
            Error::InvalidRandomLength => "random part must be ten bytes",
        })
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Error, Ulid};

    impl From<Ulid> for String {
        fn from(src: Ulid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Ulid {
        type Error = Error;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }

    impl std::error::Error for Error {}
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Ulid;

    impl From<Ulid> for uuid::Uuid {
        /// Reuses the 16-byte layout as is; no field reordering is applied.
        fn from(src: Ulid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Ulid {
        /// Reuses the 16-byte layout as is; no field reordering is applied.
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Ulid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Ulid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Ulid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Ulid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a ULID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_bytes(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Ulid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000000000000000000000", &[0u8; 16]),
                ("7ZZZZZZZZZZZZZZZZZZZZZZZZZ", &[0xffu8; 16]),
                (
                    "01ARZ3NDEKTSV4RRFFQ69G5FAV",
                    &[
                        1, 86, 62, 58, 181, 211, 214, 118, 76, 97, 239, 185, 147, 2, 189, 91,
                    ],
                ),
                (
                    "014D2PF2DB0GAND7AW5YHH1KV1",
                    &[
                        1, 35, 69, 103, 137, 171, 4, 21, 86, 157, 92, 47, 163, 16, 207, 97,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Ulid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}
