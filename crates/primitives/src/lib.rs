//! Ledger data model shared by every iCKB crate.
//!
//! These are plain owned values mirroring what the ledger stores: scripts, cells, cell deps,
//! block headers, the rational epoch and the fixed-point capacity amount.

pub mod amount;
pub mod buf;
pub mod cell;
pub mod epoch;
pub mod errors;
pub mod header;
pub mod script;

pub use amount::FixedPoint;
pub use buf::Byte32;
pub use cell::{Cell, CellDep, CellOutput, DepType, OutPoint};
pub use epoch::Epoch;
pub use errors::ParseError;
pub use header::Header;
pub use script::{Script, ScriptHashType};
