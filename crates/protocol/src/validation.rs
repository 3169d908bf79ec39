use ickb_primitives::FixedPoint;

use crate::{
    constants::{MAX_DEPOSIT, MAX_OUTPUTS, MIN_DEPOSIT},
    errors::DepositValidationError,
};

/// Validates a request for `deposit_quantity` deposits of `deposit_amount` each, to be added to
/// a transaction that already has `output_count` outputs.
///
/// A zero quantity is always accepted, since it requests nothing.
pub fn validate_deposit(
    output_count: usize,
    deposit_quantity: u32,
    deposit_amount: FixedPoint,
) -> Result<(), DepositValidationError> {
    if deposit_quantity == 0 {
        return Ok(());
    }
    validate_deposit_amount(deposit_amount)?;
    // deposits plus the receipt
    check_output_limit(output_count.saturating_add(deposit_quantity as usize + 1))
}

pub fn validate_deposit_amount(amount: FixedPoint) -> Result<(), DepositValidationError> {
    if amount < MIN_DEPOSIT {
        return Err(DepositValidationError::AmountTooLow {
            amount,
            min: MIN_DEPOSIT,
        });
    }
    if amount > MAX_DEPOSIT {
        return Err(DepositValidationError::AmountTooHigh {
            amount,
            max: MAX_DEPOSIT,
        });
    }
    Ok(())
}

/// Checks a transaction's final output count against [`MAX_OUTPUTS`].
pub fn check_output_limit(count: usize) -> Result<(), DepositValidationError> {
    if count > MAX_OUTPUTS {
        return Err(DepositValidationError::TooManyOutputs {
            count,
            max: MAX_OUTPUTS,
        });
    }
    Ok(())
}
