//! Issuance of iCKB receipts against DAO deposits.
//!
//! A deposit transaction locks N equal DAO deposits under the protocol script and mints one
//! receipt cell recording `(N, amount)` under the depositor's lock. [`ProtocolManager`] builds
//! those transactions, consumes receipts when completing a deposit and scans the ledger for
//! receipts and for protocol deposits inside a maturity window.

mod cells;
mod codec;
mod constants;
mod errors;
mod manager;
mod rate;
mod scanner;
mod validation;

pub use cells::{Deposit, Receipt};
pub use codec::ReceiptData;
pub use constants::{
    GENESIS_ACCUMULATED_RATE, ICKB_SOFT_CAP_PER_DEPOSIT, MAX_DEPOSIT, MAX_OUTPUTS, MIN_DEPOSIT,
    RECEIPT_DATA_LEN,
};
pub use errors::{DepositValidationError, ReceiptDataError, ScanError};
pub use ickb_dao::FindDepositsOptions;
pub use manager::ProtocolManager;
pub use rate::{accumulated_rate, ickb_value};
pub use scanner::FindReceiptsOptions;
pub use validation::{check_output_limit, validate_deposit, validate_deposit_amount};
