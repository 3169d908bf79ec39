use ickb_primitives::FixedPoint;

/// Smallest accepted deposit: 1 000 CKB of stake plus the 82 CKB a deposit cell under an
/// args-free protocol lock occupies.
pub const MIN_DEPOSIT: FixedPoint = FixedPoint::from_ckb(1_082);

/// Largest accepted deposit: 1 000 000 CKB of stake plus the capacity a deposit cell occupies.
pub const MAX_DEPOSIT: FixedPoint = FixedPoint::from_ckb(1_000_082);

/// Output ceiling of any transaction touching DAO deposits or withdrawals.
pub const MAX_OUTPUTS: usize = 64;

/// Length of encoded receipt data: `u32` quantity followed by `u128` amount.
pub const RECEIPT_DATA_LEN: usize = 4 + FixedPoint::SIZE;

/// Accumulated rate committed by the genesis block.
pub const GENESIS_ACCUMULATED_RATE: u64 = 10_000_000_000_000_000;

/// iCKB value of a single deposit above which the excess is discounted.
pub const ICKB_SOFT_CAP_PER_DEPOSIT: FixedPoint = FixedPoint::from_ckb(100_000);
