use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{buf::Byte32, errors::ParseError};

/// How a script's `code_hash` is matched against the code cells of a transaction.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ScriptHashType {
    #[default]
    Data,
    Type,
    Data1,
    Data2,
}

impl ScriptHashType {
    pub fn as_byte(&self) -> u8 {
        match self {
            Self::Data => 0,
            Self::Type => 1,
            Self::Data1 => 2,
            Self::Data2 => 4,
        }
    }
}

impl FromStr for ScriptHashType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data" => Ok(Self::Data),
            "type" => Ok(Self::Type),
            "data1" => Ok(Self::Data1),
            "data2" => Ok(Self::Data2),
            _ => Err(ParseError::UnknownHashType(s.to_owned())),
        }
    }
}

/// A lock or type script attached to a cell.
///
/// Two scripts are equal iff code hash, hash type and args all match.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
pub struct Script {
    code_hash: Byte32,
    hash_type: ScriptHashType,
    #[serde(with = "hex::serde")]
    args: Vec<u8>,
}

impl Script {
    pub fn new(code_hash: Byte32, hash_type: ScriptHashType, args: Vec<u8>) -> Self {
        Self {
            code_hash,
            hash_type,
            args,
        }
    }

    pub fn code_hash(&self) -> &Byte32 {
        &self.code_hash
    }

    pub fn hash_type(&self) -> ScriptHashType {
        self.hash_type
    }

    pub fn args(&self) -> &[u8] {
        &self.args
    }

    /// Number of bytes this script occupies when stored in a cell.
    pub fn occupied_bytes(&self) -> u64 {
        (Byte32::LEN + 1 + self.args.len()) as u64
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Script")
            .field("code_hash", &self.code_hash)
            .field("hash_type", &self.hash_type)
            .field("args", &format_args!("0x{}", hex::encode(&self.args)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_structural() {
        let a = Script::new(Byte32::new([1; 32]), ScriptHashType::Type, vec![1, 2]);
        let b = Script::new(Byte32::new([1; 32]), ScriptHashType::Type, vec![1, 2]);
        let c = Script::new(Byte32::new([1; 32]), ScriptHashType::Data1, vec![1, 2]);
        let d = Script::new(Byte32::new([1; 32]), ScriptHashType::Type, vec![1]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_occupied_bytes() {
        let s = Script::new(Byte32::zero(), ScriptHashType::Type, vec![0; 20]);
        assert_eq!(s.occupied_bytes(), 53);
    }

    #[test]
    fn test_hash_type_parse() {
        assert_eq!("data1".parse::<ScriptHashType>(), Ok(ScriptHashType::Data1));
        assert!("bogus".parse::<ScriptHashType>().is_err());
    }
}
