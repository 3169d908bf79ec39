use std::slice;

use futures::{
    future,
    stream::{self, BoxStream, Stream, StreamExt, TryStreamExt},
};
use ickb_dao::{FindDepositsOptions, StakeManager};
use ickb_ledger_client::{find_cells, CellQuery, LedgerClient, Order, SearchMode};
use ickb_primitives::{Cell, Script};
use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::{
    cells::{Deposit, Receipt},
    codec::ReceiptData,
    errors::ScanError,
    manager::ProtocolManager,
};

/// Options for [`ProtocolManager::find_receipts`].
#[derive(Copy, Clone, Debug, Default)]
pub struct FindReceiptsOptions {
    /// Query the live chain rather than the cached index.
    pub on_chain: bool,
}

impl<S: StakeManager> ProtocolManager<S> {
    /// Streams the receipts owned by any of `locks`.
    ///
    /// Repeated locks are scanned once, in order of first occurrence, each one drained before the
    /// next. A cell carrying the protocol type with undecodable data is yielded as
    /// [`ScanError::MalformedReceipt`] and the scan goes on; client errors end it.
    pub fn find_receipts<'a>(
        &'a self,
        client: &'a dyn LedgerClient,
        locks: &[Script],
        options: FindReceiptsOptions,
    ) -> BoxStream<'a, Result<Receipt, ScanError>> {
        let locks: Vec<Script> = locks.iter().unique().cloned().collect();
        debug!(locks = locks.len(), on_chain = %options.on_chain, "scanning receipts");

        stream::iter(locks)
            .map(move |lock| self.receipts_by_lock(client, lock, options.on_chain))
            .flatten()
            .boxed()
    }

    /// Streams the deposits locked by this deployment that mature inside the lock-up window.
    ///
    /// Missing window bounds fall back to the manager's configured window. The tip is fetched
    /// once when not given.
    pub fn find_deposits<'a>(
        &'a self,
        client: &'a dyn LedgerClient,
        options: FindDepositsOptions,
    ) -> BoxStream<'a, Result<Deposit, ScanError>> {
        let FindDepositsOptions {
            tip,
            on_chain,
            min_lock_up,
            max_lock_up,
        } = options;
        let min_lock_up = min_lock_up.unwrap_or(self.lock_up.min);
        let max_lock_up = max_lock_up.unwrap_or(self.lock_up.max);

        let tip = async move {
            let tip = match tip {
                Some(tip) => tip,
                None => client.get_tip_header().await?,
            };
            Ok::<_, ScanError>(tip)
        };

        stream::once(tip)
            .map_ok(move |tip| {
                let options = FindDepositsOptions {
                    tip: Some(tip),
                    on_chain,
                    min_lock_up: Some(min_lock_up),
                    max_lock_up: Some(max_lock_up),
                };
                self.stake()
                    .find_deposits(client, slice::from_ref(self.script()), options)
                    .map_ok(Deposit::from)
                    .map_err(ScanError::from)
            })
            .try_flatten()
            .boxed()
    }

    fn receipts_by_lock<'a>(
        &'a self,
        client: &'a dyn LedgerClient,
        lock: Script,
        on_chain: bool,
    ) -> impl Stream<Item = Result<Receipt, ScanError>> + Send + 'a {
        let query = CellQuery::by_lock(lock.clone())
            .with_filter_script(self.script().clone())
            .with_search_mode(SearchMode::Exact)
            .with_data(true);

        find_cells(client, query, Order::Asc, self.page_size, on_chain)
            .map_err(ScanError::from)
            .try_filter(move |cell| {
                let keep = self.is_receipt(cell) && cell.lock() == &lock;
                if !keep {
                    trace!(out_point = ?cell.out_point(), "skipping non-receipt cell");
                }
                future::ready(keep)
            })
            .and_then(move |cell| load_receipt(client, cell))
    }
}

async fn load_receipt(client: &dyn LedgerClient, cell: Cell) -> Result<Receipt, ScanError> {
    let data = match ReceiptData::decode(cell.data()) {
        Ok(data) => data,
        Err(source) => {
            warn!(out_point = ?cell.out_point(), %source, "malformed receipt");
            return Err(ScanError::MalformedReceipt {
                out_point: *cell.out_point(),
                source,
            });
        }
    };

    // resolved through the creating transaction, the indexed height may predate a reorg
    let header = client
        .get_transaction_header(cell.out_point().tx_hash())
        .await?
        .ok_or(ScanError::MissingHeader {
            block_number: cell.block_number(),
        })?;

    Ok(Receipt::new(cell, header, data))
}
