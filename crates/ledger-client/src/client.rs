use async_trait::async_trait;
use ickb_primitives::{Byte32, Header};

use crate::{
    errors::LedgerClientError,
    query::{CellPage, CellQuery, Cursor, Order},
};

/// Client interface for the ledger node.
///
/// Cell search is exposed one page at a time so callers own the cursor; see
/// [`crate::find_cells`] for the streaming wrapper.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Returns the header of the current chain head.
    async fn get_tip_header(&self) -> Result<Header, LedgerClientError>;

    /// Returns the header of the canonical block at `number`, if known.
    ///
    /// A height says nothing about which block a cell was created in once the chain reorgs;
    /// use [`LedgerClient::get_transaction_header`] to resolve a cell's creating block.
    async fn get_header_by_number(&self, number: u64) -> Result<Option<Header>, LedgerClientError>;

    /// Returns the header of the canonical block that committed the transaction `tx_hash`,
    /// or `None` if the transaction is unknown or not on the canonical chain.
    async fn get_transaction_header(
        &self,
        tx_hash: &Byte32,
    ) -> Result<Option<Header>, LedgerClientError>;

    /// Fetches one page of live cells matching `query` from the node's cell index.
    ///
    /// A page holds exactly `limit` cells unless it is the last one: a shorter page tells
    /// [`crate::find_cells`] the search is exhausted. Implementations that merge several
    /// sources, such as a local cache over the node, must fill each page up to `limit`
    /// before returning it.
    ///
    /// # Arguments
    ///
    /// * `query` - What to search for
    /// * `order` - Ascending or descending by creation
    /// * `limit` - Maximum number of cells in the page
    /// * `after` - Cursor returned by the previous page, `None` for the first page
    async fn find_cells_page(
        &self,
        query: &CellQuery,
        order: Order,
        limit: u32,
        after: Option<Cursor>,
    ) -> Result<CellPage, LedgerClientError>;

    /// Same as [`LedgerClient::find_cells_page`], page-size contract included, but answered
    /// from the live chain instead of the cached index.
    async fn find_cells_page_on_chain(
        &self,
        query: &CellQuery,
        order: Order,
        limit: u32,
        after: Option<Cursor>,
    ) -> Result<CellPage, LedgerClientError>;
}
