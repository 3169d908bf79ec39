use std::sync::Arc;

use ickb_config::{CellDepConfig, ConfigError, ProtocolConfig};
use ickb_dao::{DaoManager, LockUpWindow, StakeManager};
use ickb_ledger_client::DEFAULT_PAGE_SIZE;
use ickb_primitives::{Cell, CellDep, CellOutput, FixedPoint, Script};
use ickb_tx_builder::{TokenHandler, TxBuilder, UdtHandler};
use tracing::debug;

use crate::{
    cells::Receipt,
    codec::ReceiptData,
    constants::MAX_OUTPUTS,
    errors::DepositValidationError,
    validation::{check_output_limit, validate_deposit_amount},
};

/// Builds and finds the cells of one iCKB protocol deployment.
///
/// Immutable once constructed; transaction methods only mutate the transaction they are given
/// and perform no ledger I/O.
#[derive(Debug)]
pub struct ProtocolManager<S = DaoManager> {
    script: Script,
    cell_deps: Vec<CellDep>,
    stake: Arc<S>,
    token: Arc<dyn TokenHandler>,
    pub(crate) page_size: u32,
    pub(crate) lock_up: LockUpWindow,
}

impl<S: StakeManager> ProtocolManager<S> {
    pub fn new(
        script: Script,
        cell_deps: Vec<CellDep>,
        stake: Arc<S>,
        token: Arc<dyn TokenHandler>,
    ) -> Self {
        Self {
            script,
            cell_deps,
            stake,
            token,
            page_size: DEFAULT_PAGE_SIZE,
            lock_up: LockUpWindow::default(),
        }
    }

    /// Sets the page size of receipt scans.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the default lock-up window of deposit scans.
    pub fn with_lock_up(mut self, lock_up: LockUpWindow) -> Self {
        self.lock_up = lock_up;
        self
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn cell_deps(&self) -> &[CellDep] {
        &self.cell_deps
    }

    pub fn stake(&self) -> &S {
        &self.stake
    }

    pub fn token(&self) -> &Arc<dyn TokenHandler> {
        &self.token
    }

    /// Whether `cell` is a receipt of this deployment, whoever owns it.
    pub fn is_receipt(&self, cell: &Cell) -> bool {
        cell.type_() == Some(&self.script)
    }

    /// Whether `cell` is a staking deposit locked by this deployment.
    pub fn is_deposit(&self, cell: &Cell) -> bool {
        self.stake.is_deposit(cell) && cell.lock() == &self.script
    }

    /// iCKB `receipt` converts into, given the capacity its deposits occupy under this
    /// deployment's lock.
    pub fn receipt_ickb_value(&self, receipt: &Receipt) -> FixedPoint {
        receipt.ickb_value(self.stake.deposit_occupied_capacity(&self.script))
    }

    /// Appends `deposit_quantity` deposits of `deposit_amount` and their receipt under
    /// `owner_lock`.
    ///
    /// A zero quantity leaves `tx` untouched. Amount bounds, and a quantity that could never
    /// fit a transaction, are rejected before `tx` is modified. Otherwise the output ceiling
    /// is checked once the deposits are appended: on
    /// [`DepositValidationError::TooManyOutputs`] those deposits stay in `tx` without a receipt
    /// and the transaction must be discarded. Use [`crate::validate_deposit`] beforehand to
    /// avoid this.
    pub fn deposit(
        &self,
        tx: &mut dyn TxBuilder,
        deposit_quantity: u32,
        deposit_amount: FixedPoint,
        owner_lock: &Script,
    ) -> Result<(), DepositValidationError> {
        if deposit_quantity == 0 {
            return Ok(());
        }
        validate_deposit_amount(deposit_amount)?;
        // deposits plus the receipt
        let own_outputs = (deposit_quantity as usize).saturating_add(1);
        if own_outputs > MAX_OUTPUTS {
            return Err(DepositValidationError::TooManyOutputs {
                count: own_outputs,
                max: MAX_OUTPUTS,
            });
        }

        self.register(tx);
        let amounts = vec![deposit_amount; deposit_quantity as usize];
        self.stake.deposit(tx, &amounts, &self.script);

        // the receipt is still to be added
        check_output_limit(tx.output_count() + 1)?;

        let data = ReceiptData::new(deposit_quantity, deposit_amount).encode();
        let receipt =
            CellOutput::new_occupied(owner_lock.clone(), Some(self.script.clone()), data.len());
        tx.add_output(receipt, data);

        debug!(
            %deposit_quantity,
            %deposit_amount,
            ?owner_lock,
            "appended deposits with receipt"
        );
        Ok(())
    }

    /// Consumes `receipts`, in order, attaching the headers that minted them.
    ///
    /// The iCKB the receipts convert into is produced later by the registered token handler;
    /// no output is added here.
    pub fn complete_deposit(&self, tx: &mut dyn TxBuilder, receipts: &[Receipt]) {
        if receipts.is_empty() {
            return;
        }

        self.register(tx);
        for receipt in receipts {
            tx.add_header_dep(receipt.header());
        }
        for receipt in receipts {
            tx.add_input(receipt.cell());
        }
        debug!(receipts = receipts.len(), "consumed receipts");
    }

    fn register(&self, tx: &mut dyn TxBuilder) {
        tx.add_cell_deps(&self.cell_deps);
        tx.add_token_handler(self.token.clone());
    }
}

impl ProtocolManager<DaoManager> {
    /// Wires a manager over the DAO and the iCKB token from `config`.
    pub fn from_config(config: &ProtocolConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let dao = DaoManager::new(
            config.dao.to_script()?,
            CellDepConfig::to_cell_deps(&config.dao_deps)?,
        )
        .with_page_size(config.scan.page_size);
        let udt = UdtHandler::new(
            config.udt.to_script()?,
            CellDepConfig::to_cell_deps(&config.udt_deps)?,
        );

        Ok(Self::new(
            config.ickb_logic.to_script()?,
            CellDepConfig::to_cell_deps(&config.ickb_logic_deps)?,
            Arc::new(dao),
            Arc::new(udt),
        )
        .with_page_size(config.scan.page_size)
        .with_lock_up(LockUpWindow::new(
            config.scan.min_lock_up,
            config.scan.max_lock_up,
        )))
    }
}
