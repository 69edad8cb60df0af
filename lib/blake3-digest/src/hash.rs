use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use arrayvec::ArrayString;
use serde::{Deserialize, Serialize};

use crate::compress::OUT_LEN;
use crate::errors::ParseHashError;
use crate::{output, utils};

/// A 32-byte BLAKE3 digest.
///
/// `Debug` and `Display` print the digest as lowercase hex.
///
/// Equality is the derived byte comparison and is not constant-time. It must not be used to
/// check a secret value such as a MAC tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash([u8; OUT_LEN]);

impl Hash {
    /// The digest of the empty input.
    pub const EMPTY: Self = Self(output::empty_hash());

    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; OUT_LEN]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    pub const fn as_bytes(&self) -> &[u8; OUT_LEN] {
        &self.0
    }

    /// Encode the digest as 64 lowercase hex characters.
    #[inline]
    pub fn to_hex(&self) -> ArrayString<64> {
        utils::to_hex(&self.0)
    }

    /// Parse a digest from 64 hex characters, accepts both upper and lower case.
    pub fn from_hex(hex: impl AsRef<[u8]>) -> Result<Self, ParseHashError> {
        utils::from_hex(hex.as_ref()).map(Self)
    }
}

impl From<[u8; OUT_LEN]> for Hash {
    #[inline]
    fn from(bytes: [u8; OUT_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Hash> for [u8; OUT_LEN] {
    #[inline]
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

impl AsRef<[u8]> for Hash {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8; OUT_LEN]> for Hash {
    #[inline]
    fn eq(&self, other: &[u8; OUT_LEN]) -> bool {
        self.0 == *other
    }
}

impl FromStr for Hash {
    type Err = ParseHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_HEX: &str = "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262";

    #[test]
    fn empty_constant() {
        assert_eq!(Hash::EMPTY.to_hex().as_str(), EMPTY_HEX);
        assert_eq!(Hash::EMPTY, *blake3::hash(&[]).as_bytes());
    }

    #[test]
    fn parse_and_display() {
        let hash: Hash = EMPTY_HEX.parse().unwrap();
        assert_eq!(hash, Hash::EMPTY);
        assert_eq!(hash.to_string(), EMPTY_HEX);
        assert_eq!(format!("{hash:?}"), format!("Hash({EMPTY_HEX})"));
        assert_eq!(
            "abc".parse::<Hash>(),
            Err(ParseHashError::InvalidLength(3))
        );
    }

    #[test]
    fn bytes_conversions() {
        let bytes = [42; 32];
        let hash = Hash::from(bytes);
        assert_eq!(hash.as_ref(), &bytes[..]);
        assert_eq!(<[u8; 32]>::from(hash), bytes);
    }

    #[test]
    fn equality_compares_every_byte() {
        let a = crate::hash(b"tag");
        let mut bytes = *a.as_bytes();
        bytes[OUT_LEN - 1] ^= 1;
        let b = Hash::from_bytes(bytes);
        assert_ne!(a, b);
        assert_ne!(a, bytes);
        assert_eq!(a, *a.as_bytes());
    }
}
