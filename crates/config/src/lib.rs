//! TOML configuration for the iCKB protocol: script identities, their cell deps and scan
//! parameters.

mod config;
mod errors;

pub use config::{CellDepConfig, ProtocolConfig, ScanConfig, ScriptConfig};
pub use errors::ConfigError;
