use ickb_primitives::{FixedPoint, Header};

use crate::constants::{GENESIS_ACCUMULATED_RATE, ICKB_SOFT_CAP_PER_DEPOSIT};

/// DAO accumulated rate committed by `header`, stored at bytes `8..16` of its DAO field.
pub fn accumulated_rate(header: &Header) -> u64 {
    let mut rate = [0u8; 8];
    rate.copy_from_slice(&header.dao().as_slice()[8..16]);
    u64::from_le_bytes(rate)
}

/// iCKB value of `unoccupied` capacity deposited in the block of `header`.
///
/// Capacity is converted at the genesis-relative accumulated rate, so later deposits of the same
/// capacity are worth less. The part of the value above [`ICKB_SOFT_CAP_PER_DEPOSIT`] is
/// discounted by 10%. A header with a zero rate is worth nothing.
pub fn ickb_value(unoccupied: FixedPoint, header: &Header) -> FixedPoint {
    let rate = accumulated_rate(header) as u128;
    if rate == 0 {
        return FixedPoint::ZERO;
    }

    let value = FixedPoint::from_shannons(
        unoccupied
            .shannons()
            .saturating_mul(GENESIS_ACCUMULATED_RATE as u128)
            / rate,
    );
    if value <= ICKB_SOFT_CAP_PER_DEPOSIT {
        return value;
    }

    let excess = value.saturating_sub(ICKB_SOFT_CAP_PER_DEPOSIT);
    value.saturating_sub(FixedPoint::from_shannons(excess.shannons() / 10))
}
