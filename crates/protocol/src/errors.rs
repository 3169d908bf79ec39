use ickb_dao::DaoError;
use ickb_ledger_client::LedgerClientError;
use ickb_primitives::{FixedPoint, OutPoint};
use thiserror::Error;

/// Reasons a deposit request is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DepositValidationError {
    #[error("deposit amount {amount} below minimum {min}")]
    AmountTooLow { amount: FixedPoint, min: FixedPoint },

    #[error("deposit amount {amount} above maximum {max}")]
    AmountTooHigh { amount: FixedPoint, max: FixedPoint },

    /// The transaction would exceed the output ceiling.
    #[error("transaction would have {count} outputs, more than {max}")]
    TooManyOutputs { count: usize, max: usize },
}

/// Malformed receipt cell data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReceiptDataError {
    #[error("receipt data must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("receipt deposit quantity is zero")]
    ZeroQuantity,
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("ledger client: {0}")]
    Client(#[from] LedgerClientError),

    #[error("staking: {0}")]
    Dao(#[from] DaoError),

    /// The transaction that minted a receipt is not on the canonical chain.
    #[error("missing header for block {block_number}")]
    MissingHeader { block_number: u64 },

    /// A cell carrying the protocol type script holds data that is not a receipt.
    #[error("malformed receipt at {out_point:?}: {source}")]
    MalformedReceipt {
        out_point: OutPoint,
        #[source]
        source: ReceiptDataError,
    },
}
