//! Interface to the ledger node: cell search and header retrieval.
//!
//! The node itself is out of scope; [`LedgerClient`] is the capability the rest of the
//! workspace consumes, and [`find_cells`] turns its paged search into a cursor-driven stream.

mod client;
mod errors;
mod query;
mod stream;

#[cfg(any(test, feature = "test-utils"))]
pub use client::MockLedgerClient;
pub use client::LedgerClient;
pub use errors::LedgerClientError;
pub use query::{CellPage, CellQuery, Cursor, Order, ScriptType, SearchMode, DEFAULT_PAGE_SIZE};
pub use stream::find_cells;
