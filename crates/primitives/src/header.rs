use serde::{Deserialize, Serialize};

use crate::{buf::Byte32, epoch::Epoch};

/// Block header fields this workspace relies on.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Header {
    hash: Byte32,
    number: u64,
    epoch: Epoch,
    timestamp: u64,

    /// Staking (DAO) accumulators committed by the block: capacity, accumulated rate,
    /// unissued secondary issuance and occupied capacity, as four little-endian `u64`s.
    dao: Byte32,
}

impl Header {
    pub fn new(hash: Byte32, number: u64, epoch: Epoch, timestamp: u64, dao: Byte32) -> Self {
        Self {
            hash,
            number,
            epoch,
            timestamp,
            dao,
        }
    }

    pub fn hash(&self) -> &Byte32 {
        &self.hash
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn dao(&self) -> &Byte32 {
        &self.dao
    }
}
