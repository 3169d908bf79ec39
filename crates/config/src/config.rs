use std::{fs, path::Path, str::FromStr};

use ickb_dao::{default_max_lock_up, default_min_lock_up};
use ickb_ledger_client::DEFAULT_PAGE_SIZE;
use ickb_primitives::{
    Byte32, CellDep, DepType, Epoch, OutPoint, ParseError, Script, ScriptHashType,
};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Deployment of the iCKB protocol on one network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// The protocol script, used as deposit lock and receipt type.
    pub ickb_logic: ScriptConfig,

    #[serde(default)]
    pub ickb_logic_deps: Vec<CellDepConfig>,

    /// The ledger's staking (DAO) type script.
    pub dao: ScriptConfig,

    #[serde(default)]
    pub dao_deps: Vec<CellDepConfig>,

    /// The iCKB token script.
    pub udt: ScriptConfig,

    #[serde(default)]
    pub udt_deps: Vec<CellDepConfig>,

    #[serde(default)]
    pub scan: ScanConfig,
}

impl ProtocolConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the TOML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Checks every script and dep parses and the scan parameters are coherent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ickb_logic.to_script()?;
        self.dao.to_script()?;
        self.udt.to_script()?;
        for dep in self
            .ickb_logic_deps
            .iter()
            .chain(&self.dao_deps)
            .chain(&self.udt_deps)
        {
            dep.to_cell_dep()?;
        }
        self.scan.validate()
    }
}

/// A script as written in config files. Hex fields accept an optional `0x` prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub code_hash: String,

    #[serde(default)]
    pub hash_type: ScriptHashType,

    #[serde(default)]
    pub args: String,
}

impl ScriptConfig {
    pub fn to_script(&self) -> Result<Script, ConfigError> {
        let code_hash = Byte32::from_str(&self.code_hash).map_err(|source| {
            ConfigError::InvalidField {
                field: "code_hash",
                source,
            }
        })?;
        let args = decode_hex(&self.args).map_err(|source| ConfigError::InvalidField {
            field: "args",
            source,
        })?;
        Ok(Script::new(code_hash, self.hash_type, args))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellDepConfig {
    pub tx_hash: String,
    pub index: u32,

    #[serde(default = "default_dep_type")]
    pub dep_type: DepType,
}

impl CellDepConfig {
    pub fn to_cell_dep(&self) -> Result<CellDep, ConfigError> {
        let tx_hash =
            Byte32::from_str(&self.tx_hash).map_err(|source| ConfigError::InvalidField {
                field: "tx_hash",
                source,
            })?;
        Ok(CellDep::new(OutPoint::new(tx_hash, self.index), self.dep_type))
    }

    /// Converts a list of deps, stopping at the first invalid one.
    pub fn to_cell_deps(deps: &[Self]) -> Result<Vec<CellDep>, ConfigError> {
        deps.iter().map(Self::to_cell_dep).collect()
    }
}

/// Ledger scan parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Cells fetched per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Minimum remaining lock-up of deposits returned by deposit scans.
    #[serde(default = "default_min_lock_up")]
    pub min_lock_up: Epoch,

    /// Maximum remaining lock-up of deposits returned by deposit scans.
    #[serde(default = "default_max_lock_up")]
    pub max_lock_up: Epoch,
}

impl ScanConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.min_lock_up > self.max_lock_up {
            return Err(ConfigError::InvertedLockUp {
                min: self.min_lock_up,
                max: self.max_lock_up,
            });
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            min_lock_up: default_min_lock_up(),
            max_lock_up: default_max_lock_up(),
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_dep_type() -> DepType {
    DepType::Code
}

fn decode_hex(s: &str) -> Result<Vec<u8>, ParseError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    Ok(hex::decode(s)?)
}
