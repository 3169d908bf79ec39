use futures::{
    future,
    stream::{self, BoxStream, Stream, StreamExt, TryStreamExt},
};
use ickb_ledger_client::{
    find_cells, CellQuery, LedgerClient, Order, SearchMode, DEFAULT_PAGE_SIZE,
};
use ickb_primitives::{Cell, CellDep, CellOutput, Epoch, FixedPoint, Header, Script};
use ickb_tx_builder::TxBuilder;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    constants::{default_max_lock_up, default_min_lock_up, DEPOSIT_DATA},
    deposit::DaoDeposit,
    errors::DaoError,
    maturity::{maturity_after, LockUpWindow},
};

/// Staking operations the protocol core relies on.
pub trait StakeManager: Send + Sync {
    /// Whether `cell` is a staking deposit, regardless of who owns it.
    fn is_deposit(&self, cell: &Cell) -> bool;

    /// Appends one deposit output per amount, all under `lock`, and registers the cell deps
    /// the staking script needs.
    fn deposit(&self, tx: &mut dyn TxBuilder, amounts: &[FixedPoint], lock: &Script);

    /// Capacity a deposit under `lock` occupies, which earns no staking reward.
    fn deposit_occupied_capacity(&self, lock: &Script) -> FixedPoint;

    /// Streams the live deposits locked by any of `locks` that mature inside the options'
    /// lock-up window.
    fn find_deposits<'a>(
        &'a self,
        client: &'a dyn LedgerClient,
        locks: &[Script],
        options: FindDepositsOptions,
    ) -> BoxStream<'a, Result<DaoDeposit, DaoError>>;
}

/// Options for [`StakeManager::find_deposits`].
#[derive(Clone, Debug, Default)]
pub struct FindDepositsOptions {
    /// Reference tip; the current chain head is fetched when absent.
    pub tip: Option<Header>,

    /// Query the live chain rather than the cached index.
    pub on_chain: bool,

    /// Defaults to [`default_min_lock_up`].
    pub min_lock_up: Option<Epoch>,

    /// Defaults to [`default_max_lock_up`].
    pub max_lock_up: Option<Epoch>,
}

impl FindDepositsOptions {
    pub fn window(&self) -> LockUpWindow {
        LockUpWindow::new(
            self.min_lock_up.unwrap_or_else(default_min_lock_up),
            self.max_lock_up.unwrap_or_else(default_max_lock_up),
        )
    }
}

/// [`StakeManager`] for the ledger's DAO script.
#[derive(Clone, Debug)]
pub struct DaoManager {
    script: Script,
    cell_deps: Vec<CellDep>,
    page_size: u32,
}

impl DaoManager {
    pub fn new(script: Script, cell_deps: Vec<CellDep>) -> Self {
        Self {
            script,
            cell_deps,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn cell_deps(&self) -> &[CellDep] {
        &self.cell_deps
    }

    fn deposits_by_lock<'a>(
        &'a self,
        client: &'a dyn LedgerClient,
        lock: Script,
        tip: Epoch,
        window: LockUpWindow,
        on_chain: bool,
    ) -> impl Stream<Item = Result<DaoDeposit, DaoError>> + Send + 'a {
        let query = CellQuery::by_lock(lock.clone())
            .with_filter_script(self.script.clone())
            .with_search_mode(SearchMode::Exact)
            .with_data(true);

        find_cells(client, query, Order::Asc, self.page_size, on_chain)
            .map_err(DaoError::from)
            .try_filter(move |cell| future::ready(cell.lock() == &lock && self.is_deposit(cell)))
            .try_filter_map(move |cell| load_deposit(client, cell, tip, window))
    }
}

impl StakeManager for DaoManager {
    fn is_deposit(&self, cell: &Cell) -> bool {
        cell.type_() == Some(&self.script) && cell.data() == DEPOSIT_DATA.as_slice()
    }

    fn deposit(&self, tx: &mut dyn TxBuilder, amounts: &[FixedPoint], lock: &Script) {
        if amounts.is_empty() {
            return;
        }

        tx.add_cell_deps(&self.cell_deps);
        for amount in amounts {
            let output = CellOutput::new(*amount, lock.clone(), Some(self.script.clone()));
            tx.add_output(output, DEPOSIT_DATA.to_vec());
        }
        debug!(count = amounts.len(), ?lock, "appended dao deposits");
    }

    fn deposit_occupied_capacity(&self, lock: &Script) -> FixedPoint {
        CellOutput::new(FixedPoint::ZERO, lock.clone(), Some(self.script.clone()))
            .occupied_capacity(DEPOSIT_DATA.len())
    }

    fn find_deposits<'a>(
        &'a self,
        client: &'a dyn LedgerClient,
        locks: &[Script],
        options: FindDepositsOptions,
    ) -> BoxStream<'a, Result<DaoDeposit, DaoError>> {
        let locks: Vec<Script> = locks.iter().unique().cloned().collect();
        let window = options.window();
        let on_chain = options.on_chain;

        let tip = async move {
            let tip = match options.tip {
                Some(tip) => tip,
                None => client.get_tip_header().await?,
            };
            Ok::<_, DaoError>(tip)
        };

        stream::once(tip)
            .map_ok(move |tip| {
                let tip = tip.epoch();
                debug!(%tip, locks = locks.len(), "scanning dao deposits");
                stream::iter(locks.clone())
                    .map(move |lock| self.deposits_by_lock(client, lock, tip, window, on_chain))
                    .flatten()
            })
            .try_flatten()
            .boxed()
    }
}

/// Fetches the deposit's header and keeps it only if it matures inside `window`.
async fn load_deposit(
    client: &dyn LedgerClient,
    cell: Cell,
    tip: Epoch,
    window: LockUpWindow,
) -> Result<Option<DaoDeposit>, DaoError> {
    let header = client
        .get_transaction_header(cell.out_point().tx_hash())
        .await?
        .ok_or(DaoError::MissingHeader {
            block_number: cell.block_number(),
        })?;

    let Some(maturity) = tip
        .checked_add(window.min)
        .and_then(|earliest| maturity_after(header.epoch(), earliest))
    else {
        trace!(out_point = ?cell.out_point(), "deposit matures past the last epoch");
        return Ok(None);
    };
    if !window.contains(tip, maturity) {
        trace!(out_point = ?cell.out_point(), %maturity, "deposit outside lock-up window");
        return Ok(None);
    }

    Ok(Some(DaoDeposit::new(cell, header, maturity)))
}
