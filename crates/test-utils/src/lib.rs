//! Fixtures shared by the workspace's tests.

#![allow(unreachable_pub, reason = "test utils crate")]

use ickb_primitives::{
    Byte32, Cell, CellDep, CellOutput, DepType, Epoch, FixedPoint, Header, OutPoint, Script,
    ScriptHashType,
};

/// Accumulated rate committed by the genesis block.
pub const TEST_GENESIS_AR: u64 = 10_000_000_000_000_000;

/// Deterministic 32-byte buffer filled with `n`.
pub fn buf32(n: u8) -> Byte32 {
    Byte32::new([n; 32])
}

/// A type-hashed script whose code hash and args are derived from `n`.
pub fn script(n: u8) -> Script {
    Script::new(buf32(n), ScriptHashType::Type, vec![n])
}

pub fn out_point(n: u8, index: u32) -> OutPoint {
    OutPoint::new(buf32(n), index)
}

pub fn cell_dep(n: u8) -> CellDep {
    CellDep::new(out_point(n, 0), DepType::Code)
}

/// Header DAO field with the given accumulated rate and zeroed other accumulators.
pub fn dao_field(accumulated_rate: u64) -> Byte32 {
    let mut dao = [0u8; 32];
    dao[8..16].copy_from_slice(&accumulated_rate.to_le_bytes());
    Byte32::new(dao)
}

/// Header at `number`, one epoch per 1800 blocks, genesis accumulated rate.
pub fn header(number: u64) -> Header {
    header_at(number, Epoch::new(number / 1800, number % 1800, 1800), TEST_GENESIS_AR)
}

/// Header at `number` with an explicit epoch and accumulated rate.
pub fn header_at(number: u64, epoch: Epoch, accumulated_rate: u64) -> Header {
    let mut hash = [0u8; 32];
    hash[..8].copy_from_slice(&number.to_le_bytes());
    Header::new(
        Byte32::new(hash),
        number,
        epoch,
        number * 8_000,
        dao_field(accumulated_rate),
    )
}

/// A cell with the given scripts, capacity and data, created at `block_number`.
pub fn cell(
    n: u8,
    capacity: FixedPoint,
    lock: Script,
    type_: Option<Script>,
    data: Vec<u8>,
    block_number: u64,
) -> Cell {
    Cell::new(
        out_point(n, 0),
        CellOutput::new(capacity, lock, type_),
        data,
        block_number,
    )
}
