//! The ledger's native staking mechanism (the DAO), seen from the iCKB protocol.
//!
//! [`StakeManager`] is the capability the protocol core consumes. [`DaoManager`] implements it
//! for the DAO: recognizing deposit cells, appending deposit outputs and discovering deposits
//! that mature inside a lock-up window.

mod constants;
mod deposit;
mod errors;
mod manager;
mod maturity;

pub use constants::{
    default_max_lock_up, default_min_lock_up, DEPOSIT_DATA, WITHDRAWAL_CYCLE_EPOCHS,
};
pub use deposit::DaoDeposit;
pub use errors::DaoError;
pub use manager::{DaoManager, FindDepositsOptions, StakeManager};
pub use maturity::{maturity_after, LockUpWindow};
