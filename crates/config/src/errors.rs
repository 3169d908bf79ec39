use std::{io, path::PathBuf};

use ickb_primitives::{Epoch, ParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {field}: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ParseError,
    },

    #[error("scan page size must be positive")]
    ZeroPageSize,

    #[error("min lock-up {min} exceeds max lock-up {max}")]
    InvertedLockUp { min: Epoch, max: Epoch },
}
