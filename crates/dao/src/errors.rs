use ickb_ledger_client::LedgerClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaoError {
    #[error("ledger client: {0}")]
    Client(#[from] LedgerClientError),

    /// The transaction that created a deposit is not on the canonical chain; `block_number`
    /// is the height the index last reported for it.
    #[error("missing header for block {block_number}")]
    MissingHeader { block_number: u64 },
}
