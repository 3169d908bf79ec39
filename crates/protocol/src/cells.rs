use ickb_dao::DaoDeposit;
use ickb_primitives::{Cell, Epoch, FixedPoint, Header};

use crate::{codec::ReceiptData, rate::ickb_value};

/// A live receipt cell with the header of the block that minted it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Receipt {
    cell: Cell,
    header: Header,
    data: ReceiptData,
}

impl Receipt {
    pub fn new(cell: Cell, header: Header, data: ReceiptData) -> Self {
        Self { cell, header, data }
    }

    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn data(&self) -> ReceiptData {
        self.data
    }

    pub fn deposit_quantity(&self) -> u32 {
        self.data.deposit_quantity()
    }

    pub fn deposit_amount(&self) -> FixedPoint {
        self.data.deposit_amount()
    }

    /// iCKB the receipt converts into: the value of one deposit times the quantity.
    ///
    /// `deposit_occupied` is the capacity each recorded deposit cell occupies; see
    /// [`crate::ProtocolManager::receipt_ickb_value`].
    pub fn ickb_value(&self, deposit_occupied: FixedPoint) -> FixedPoint {
        let unoccupied = self.deposit_amount().saturating_sub(deposit_occupied);
        ickb_value(unoccupied, &self.header)
            .checked_mul(self.deposit_quantity() as u128)
            .unwrap_or(FixedPoint::MAX)
    }
}

/// A DAO deposit locked by the protocol script.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    inner: DaoDeposit,
}

impl Deposit {
    pub fn cell(&self) -> &Cell {
        self.inner.cell()
    }

    pub fn header(&self) -> &Header {
        self.inner.header()
    }

    pub fn maturity(&self) -> Epoch {
        self.inner.maturity()
    }

    pub fn amount(&self) -> FixedPoint {
        self.inner.capacity()
    }

    /// iCKB the deposit converts into; only the capacity the cell does not occupy counts.
    pub fn ickb_value(&self) -> FixedPoint {
        let cell = self.cell();
        let occupied = cell.output().occupied_capacity(cell.data().len());
        ickb_value(self.amount().saturating_sub(occupied), self.header())
    }

    pub fn into_inner(self) -> DaoDeposit {
        self.inner
    }
}

impl From<DaoDeposit> for Deposit {
    fn from(inner: DaoDeposit) -> Self {
        Self { inner }
    }
}
