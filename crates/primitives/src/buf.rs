use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

/// 32-byte buffer used for hashes and code hashes.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Byte32(#[serde(with = "hex::serde")] [u8; 32]);

impl Byte32 {
    pub const LEN: usize = 32;

    pub const fn new(data: [u8; 32]) -> Self {
        Self(data)
    }

    pub const fn zero() -> Self {
        Self([0; 32])
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Byte32 {
    fn from(value: [u8; 32]) -> Self {
        Self(value)
    }
}

impl From<Byte32> for [u8; 32] {
    fn from(value: Byte32) -> Self {
        value.0
    }
}

impl AsRef<[u8; 32]> for Byte32 {
    fn as_ref(&self) -> &[u8; 32] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Byte32 {
    type Error = ParseError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 32] = value
            .try_into()
            .map_err(|_| ParseError::InvalidLength {
                expected: Self::LEN,
                actual: value.len(),
            })?;
        Ok(Self(arr))
    }
}

impl FromStr for Byte32 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let mut buf = [0u8; 32];
        hex::decode_to_slice(s, &mut buf)?;
        Ok(Self(buf))
    }
}

impl fmt::Debug for Byte32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Byte32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shortened form is enough for logs.
        let enc = hex::encode(self.0);
        write!(f, "0x{}..{}", &enc[..8], &enc[56..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_prefix() {
        let plain = "11".repeat(32);
        let prefixed = format!("0x{plain}");
        let a: Byte32 = plain.parse().unwrap();
        let b: Byte32 = prefixed.parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Byte32::new([0x11; 32]));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            "abcd".parse::<Byte32>(),
            Err(ParseError::InvalidHex(hex::FromHexError::InvalidStringLength))
        );
        assert_eq!(
            "zz".repeat(32).parse::<Byte32>(),
            Err(ParseError::InvalidHex(
                hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 }
            ))
        );
    }

    #[test]
    fn test_try_from_slice_length() {
        let err = Byte32::try_from(&[0u8; 31][..]).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidLength {
                expected: 32,
                actual: 31
            }
        ));
    }

    #[test]
    fn test_serde_hex() {
        let buf = Byte32::new([0xab; 32]);
        let json = serde_json::to_string(&buf).unwrap();
        assert_eq!(json, format!("\"{}\"", "ab".repeat(32)));
        let back: Byte32 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, buf);
    }
}
