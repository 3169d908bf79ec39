use serde::{Deserialize, Serialize};

use crate::{amount::FixedPoint, buf::Byte32, script::Script};

/// Reference to a transaction output.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
pub struct OutPoint {
    tx_hash: Byte32,
    index: u32,
}

impl OutPoint {
    pub fn new(tx_hash: Byte32, index: u32) -> Self {
        Self { tx_hash, index }
    }

    pub fn tx_hash(&self) -> &Byte32 {
        &self.tx_hash
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

/// The spendable part of a cell: capacity plus its lock and optional type script.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct CellOutput {
    capacity: FixedPoint,
    lock: Script,
    #[serde(rename = "type")]
    type_: Option<Script>,
}

impl CellOutput {
    /// Bytes taken by the capacity field itself.
    const CAPACITY_BYTES: u64 = 8;

    pub fn new(capacity: FixedPoint, lock: Script, type_: Option<Script>) -> Self {
        Self {
            capacity,
            lock,
            type_,
        }
    }

    /// Builds an output whose capacity is exactly what it occupies with `data_len` bytes of data.
    pub fn new_occupied(lock: Script, type_: Option<Script>, data_len: usize) -> Self {
        let mut output = Self::new(FixedPoint::ZERO, lock, type_);
        output.capacity = output.occupied_capacity(data_len);
        output
    }

    pub fn capacity(&self) -> FixedPoint {
        self.capacity
    }

    pub fn lock(&self) -> &Script {
        &self.lock
    }

    pub fn type_(&self) -> Option<&Script> {
        self.type_.as_ref()
    }

    /// Capacity this output occupies on the ledger when carrying `data_len` bytes of data.
    ///
    /// One byte of storage costs one CKB.
    pub fn occupied_capacity(&self, data_len: usize) -> FixedPoint {
        let bytes = Self::CAPACITY_BYTES
            + self.lock.occupied_bytes()
            + self.type_.as_ref().map_or(0, Script::occupied_bytes)
            + data_len as u64;
        FixedPoint::from_ckb(bytes as u128)
    }
}

/// A live cell as returned by the ledger.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Cell {
    out_point: OutPoint,
    output: CellOutput,
    #[serde(with = "hex::serde")]
    data: Vec<u8>,

    /// Number of the block whose transaction created this cell.
    block_number: u64,
}

impl Cell {
    pub fn new(out_point: OutPoint, output: CellOutput, data: Vec<u8>, block_number: u64) -> Self {
        Self {
            out_point,
            output,
            data,
            block_number,
        }
    }

    pub fn out_point(&self) -> &OutPoint {
        &self.out_point
    }

    pub fn output(&self) -> &CellOutput {
        &self.output
    }

    pub fn lock(&self) -> &Script {
        self.output.lock()
    }

    pub fn type_(&self) -> Option<&Script> {
        self.output.type_()
    }

    pub fn capacity(&self) -> FixedPoint {
        self.output.capacity()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn block_number(&self) -> u64 {
        self.block_number
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DepType {
    Code,
    DepGroup,
}

/// A cell dependency, identified by the out point it references and how it is resolved.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
pub struct CellDep {
    out_point: OutPoint,
    dep_type: DepType,
}

impl CellDep {
    pub fn new(out_point: OutPoint, dep_type: DepType) -> Self {
        Self {
            out_point,
            dep_type,
        }
    }

    pub fn out_point(&self) -> &OutPoint {
        &self.out_point
    }

    pub fn dep_type(&self) -> DepType {
        self.dep_type
    }
}
