use thiserror::Error;

/// Errors that can occur when talking to the ledger node.
#[derive(Debug, Error)]
pub enum LedgerClientError {
    /// Network-related error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// RPC call failed.
    #[error("rpc error: {0}")]
    Rpc(String),

    /// Response could not be decoded.
    #[error("failed to deserialize response: {0}")]
    Deserialization(String),
}
