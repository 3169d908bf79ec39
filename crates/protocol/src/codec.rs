use ickb_primitives::FixedPoint;

use crate::{constants::RECEIPT_DATA_LEN, errors::ReceiptDataError};

/// Payload of a receipt cell.
///
/// Encoded as the little-endian deposit quantity (`u32`) followed by the little-endian
/// per-deposit amount in shannons (`u128`). The layout is fixed-width, so equal payloads always
/// encode to equal bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ReceiptData {
    deposit_quantity: u32,
    deposit_amount: FixedPoint,
}

impl ReceiptData {
    pub fn new(deposit_quantity: u32, deposit_amount: FixedPoint) -> Self {
        Self {
            deposit_quantity,
            deposit_amount,
        }
    }

    pub fn deposit_quantity(&self) -> u32 {
        self.deposit_quantity
    }

    pub fn deposit_amount(&self) -> FixedPoint {
        self.deposit_amount
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(RECEIPT_DATA_LEN);
        buf.extend_from_slice(&self.deposit_quantity.to_le_bytes());
        buf.extend_from_slice(&self.deposit_amount.to_le_bytes());
        buf
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ReceiptDataError> {
        if bytes.len() != RECEIPT_DATA_LEN {
            return Err(ReceiptDataError::InvalidLength {
                expected: RECEIPT_DATA_LEN,
                actual: bytes.len(),
            });
        }

        let mut quantity = [0u8; 4];
        quantity.copy_from_slice(&bytes[..4]);
        let mut amount = [0u8; FixedPoint::SIZE];
        amount.copy_from_slice(&bytes[4..]);

        let deposit_quantity = u32::from_le_bytes(quantity);
        if deposit_quantity == 0 {
            return Err(ReceiptDataError::ZeroQuantity);
        }

        Ok(Self::new(deposit_quantity, FixedPoint::from_le_bytes(amount)))
    }
}
