use ickb_primitives::Epoch;

use crate::constants::{default_max_lock_up, default_min_lock_up, WITHDRAWAL_CYCLE_EPOCHS};

/// Range of remaining lock-up, relative to the tip, a deposit must fall into.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LockUpWindow {
    pub min: Epoch,
    pub max: Epoch,
}

impl LockUpWindow {
    pub fn new(min: Epoch, max: Epoch) -> Self {
        Self { min, max }
    }

    /// Whether a deposit maturing at `maturity` is inside the window as seen from `tip`.
    ///
    /// A lower bound past the representable range admits nothing; an upper bound past it caps
    /// nothing.
    pub fn contains(&self, tip: Epoch, maturity: Epoch) -> bool {
        let above_min = tip.checked_add(self.min).is_some_and(|lo| lo <= maturity);
        let below_max = tip.checked_add(self.max).map_or(true, |hi| maturity <= hi);
        above_min && below_max
    }
}

impl Default for LockUpWindow {
    fn default() -> Self {
        Self::new(default_min_lock_up(), default_max_lock_up())
    }
}

/// Returns the first cycle end of a deposit made at `deposit_epoch` that is not before
/// `earliest`.
///
/// At least one full cycle always elapses, so a deposit never matures at its own epoch.
/// Returns [`None`] when that cycle end is past the last representable epoch.
pub fn maturity_after(deposit_epoch: Epoch, earliest: Epoch) -> Option<Epoch> {
    let elapsed = earliest.checked_sub(deposit_epoch).unwrap_or(Epoch::ZERO);
    let (num, den) = elapsed.to_fraction();
    let cycle = den * WITHDRAWAL_CYCLE_EPOCHS as u128;
    let cycles = u64::try_from(num.div_ceil(cycle).max(1)).ok()?;
    deposit_epoch.checked_add_epochs(cycles.checked_mul(WITHDRAWAL_CYCLE_EPOCHS)?)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_first_cycle() {
        let deposit = Epoch::new(0, 0, 1);
        let earliest = Epoch::new(100, 1, 24);
        assert_eq!(maturity_after(deposit, earliest), Some(Epoch::new(180, 0, 1)));
    }

    #[test]
    fn test_exact_cycle_end_is_reused() {
        let deposit = Epoch::new(10, 3, 8);
        let earliest = Epoch::new(190, 3, 8);
        assert_eq!(maturity_after(deposit, earliest), Some(Epoch::new(190, 3, 8)));
    }

    #[test]
    fn test_just_past_cycle_end_rolls_over() {
        let deposit = Epoch::new(0, 0, 1);
        let earliest = Epoch::new(180, 1, 24);
        assert_eq!(maturity_after(deposit, earliest), Some(Epoch::new(360, 0, 1)));
    }

    #[test]
    fn test_earliest_before_deposit() {
        let deposit = Epoch::new(50, 0, 1);
        let earliest = Epoch::new(10, 0, 1);
        assert_eq!(maturity_after(deposit, earliest), Some(Epoch::new(230, 0, 1)));
    }

    #[test]
    fn test_window_bounds() {
        let window = LockUpWindow::default();
        let tip = Epoch::new(170, 0, 1);
        assert!(window.contains(tip, Epoch::new(180, 0, 1)));
        assert!(window.contains(tip, Epoch::new(188, 0, 1)));
        assert!(!window.contains(tip, Epoch::new(188, 1, 24)));
        assert!(!window.contains(tip, Epoch::new(170, 0, 1)));
        assert!(window.contains(tip, Epoch::new(170, 1, 24)));
    }

    #[test]
    fn test_last_epochs_do_not_overflow() {
        let deposit = Epoch::new(u64::MAX - 100, 0, 1);
        assert_eq!(maturity_after(deposit, deposit), None);

        let last = Epoch::new(u64::MAX - 180, 0, 1);
        assert_eq!(
            maturity_after(last, last),
            Some(Epoch::new(u64::MAX, 0, 1))
        );

        let window = LockUpWindow::default();
        let near_end = Epoch::new(u64::MAX - 1, 0, 1);
        // the upper bound overflows, so only the lower bound applies
        assert!(window.contains(near_end, Epoch::new(u64::MAX, 0, 1)));
        assert!(!window.contains(near_end, near_end));
        let tip = Epoch::new(u64::MAX - 200, 0, 1);
        assert!(window.contains(tip, Epoch::new(u64::MAX - 200, 1, 2)));
        // the lower bound overflows, so nothing is inside
        let window = LockUpWindow::new(Epoch::new(10, 0, 1), Epoch::new(20, 0, 1));
        assert!(!window.contains(near_end, Epoch::new(u64::MAX, 0, 1)));
    }

    proptest! {
        #[test]
        fn test_maturity_is_a_cycle_end_not_before_earliest(
            dep_number in 0u64..10_000,
            dep_index in 0u64..1800,
            offset in 0u64..2_000,
            offset_index in 0u64..24,
        ) {
            let deposit = Epoch::new(dep_number, dep_index, 1800);
            let earliest = deposit.checked_add(Epoch::new(offset, offset_index, 24)).unwrap();
            let maturity = maturity_after(deposit, earliest).unwrap();

            prop_assert!(maturity >= earliest);
            prop_assert!(maturity > deposit);

            let (num, den) = maturity.checked_sub(deposit).unwrap().to_fraction();
            prop_assert_eq!(num % (den * WITHDRAWAL_CYCLE_EPOCHS as u128), 0);

            // one cycle earlier would already be too early, unless it is the deposit itself
            let (cycles_num, cycles_den) = (num, den * WITHDRAWAL_CYCLE_EPOCHS as u128);
            let cycles = cycles_num / cycles_den;
            if cycles > 1 {
                let previous = deposit
                    .checked_add_epochs((cycles as u64 - 1) * WITHDRAWAL_CYCLE_EPOCHS)
                    .unwrap();
                prop_assert!(previous < earliest);
            }
        }
    }
}
