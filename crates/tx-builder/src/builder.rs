use std::sync::Arc;

use ickb_primitives::{Cell, CellDep, CellOutput, Header};

use crate::handler::TokenHandler;

/// Accumulates the pieces of a transaction under construction.
///
/// Dependency, handler and header registration are set-adds: registering the same item twice
/// leaves the transaction unchanged.
pub trait TxBuilder {
    /// Adds cell deps, skipping those already present.
    fn add_cell_deps(&mut self, deps: &[CellDep]);

    /// Registers a token handler, keyed by its token script.
    fn add_token_handler(&mut self, handler: Arc<dyn TokenHandler>);

    /// Appends an output with its data.
    fn add_output(&mut self, output: CellOutput, data: Vec<u8>);

    /// Appends a cell as an input.
    fn add_input(&mut self, cell: &Cell);

    /// Adds a header dep, keyed by block hash.
    fn add_header_dep(&mut self, header: &Header);

    /// Number of outputs appended so far.
    fn output_count(&self) -> usize;
}
