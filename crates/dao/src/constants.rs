use ickb_primitives::Epoch;

/// Data carried by a deposit cell: eight zero bytes. A withdrawal request stores the deposit
/// block number here instead.
pub const DEPOSIT_DATA: [u8; 8] = [0; 8];

/// Deposits can only be withdrawn at the end of 180-epoch cycles counted from the deposit.
pub const WITHDRAWAL_CYCLE_EPOCHS: u64 = 180;

/// Shortest lock-up considered when scanning, about 10 minutes (an epoch is about 4 hours).
pub fn default_min_lock_up() -> Epoch {
    Epoch::new(0, 1, 24)
}

/// Longest lock-up considered when scanning, about 3 days.
pub fn default_max_lock_up() -> Epoch {
    Epoch::new(18, 0, 1)
}
