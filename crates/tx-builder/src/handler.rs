use std::fmt::Debug;

use ickb_primitives::{CellDep, Script};

/// Opaque handle for the fungible token logic a transaction needs.
///
/// The transaction-assembly layer invokes it when balancing; the protocol core only registers
/// it. Its token script is its identity.
pub trait TokenHandler: Debug + Send + Sync {
    /// Type script identifying the token.
    fn script(&self) -> &Script;

    /// Cell deps the token script needs to run.
    fn cell_deps(&self) -> &[CellDep];
}

/// Handler for a user-defined token identified by a type script.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UdtHandler {
    script: Script,
    cell_deps: Vec<CellDep>,
}

impl UdtHandler {
    pub fn new(script: Script, cell_deps: Vec<CellDep>) -> Self {
        Self { script, cell_deps }
    }
}

impl TokenHandler for UdtHandler {
    fn script(&self) -> &Script {
        &self.script
    }

    fn cell_deps(&self) -> &[CellDep] {
        &self.cell_deps
    }
}
