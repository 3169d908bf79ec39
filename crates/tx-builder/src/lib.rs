//! Transaction assembly seam.
//!
//! The protocol core never assembles or signs transactions itself; it only accumulates inputs,
//! outputs and dependencies into something implementing [`TxBuilder`]. [`TxSkeleton`] is the
//! in-memory implementation used by callers that do not bring their own.

mod builder;
mod handler;
mod skeleton;

pub use builder::TxBuilder;
pub use handler::{TokenHandler, UdtHandler};
pub use skeleton::TxSkeleton;
