use ickb_primitives::{Cell, Epoch, FixedPoint, Header};

/// A live DAO deposit cell together with the header of the block that created it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DaoDeposit {
    cell: Cell,
    header: Header,

    /// Next cycle end at which the deposit can be withdrawn, as seen from the scan's tip.
    maturity: Epoch,
}

impl DaoDeposit {
    pub fn new(cell: Cell, header: Header, maturity: Epoch) -> Self {
        Self {
            cell,
            header,
            maturity,
        }
    }

    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn maturity(&self) -> Epoch {
        self.maturity
    }

    /// Total capacity locked by the deposit cell.
    pub fn capacity(&self) -> FixedPoint {
        self.cell.capacity()
    }

    pub fn into_parts(self) -> (Cell, Header, Epoch) {
        (self.cell, self.header, self.maturity)
    }
}
