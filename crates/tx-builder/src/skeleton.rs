use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use ickb_primitives::{Byte32, Cell, CellDep, CellOutput, Header, Script};
use tracing::trace;

use crate::{builder::TxBuilder, handler::TokenHandler};

/// In-memory transaction under construction.
#[derive(Debug, Default)]
pub struct TxSkeleton {
    cell_deps: BTreeSet<CellDep>,
    header_deps: BTreeSet<Byte32>,
    token_handlers: BTreeMap<Script, Arc<dyn TokenHandler>>,
    inputs: Vec<Cell>,
    outputs: Vec<CellOutput>,
    outputs_data: Vec<Vec<u8>>,
}

impl TxSkeleton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell_deps(&self) -> impl Iterator<Item = &CellDep> {
        self.cell_deps.iter()
    }

    pub fn header_deps(&self) -> impl Iterator<Item = &Byte32> {
        self.header_deps.iter()
    }

    pub fn token_handlers(&self) -> impl Iterator<Item = &Arc<dyn TokenHandler>> {
        self.token_handlers.values()
    }

    pub fn inputs(&self) -> &[Cell] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[CellOutput] {
        &self.outputs
    }

    pub fn outputs_data(&self) -> &[Vec<u8>] {
        &self.outputs_data
    }

    /// Returns the output at `idx` together with its data.
    pub fn output(&self, idx: usize) -> Option<(&CellOutput, &[u8])> {
        let output = self.outputs.get(idx)?;
        let data = self.outputs_data.get(idx)?;
        Some((output, data.as_slice()))
    }
}

impl TxBuilder for TxSkeleton {
    fn add_cell_deps(&mut self, deps: &[CellDep]) {
        self.cell_deps.extend(deps.iter().copied());
    }

    fn add_token_handler(&mut self, handler: Arc<dyn TokenHandler>) {
        let script = handler.script().clone();
        if self.token_handlers.contains_key(&script) {
            return;
        }
        trace!(?script, "registering token handler");
        self.add_cell_deps(handler.cell_deps());
        self.token_handlers.insert(script, handler);
    }

    fn add_output(&mut self, output: CellOutput, data: Vec<u8>) {
        self.outputs.push(output);
        self.outputs_data.push(data);
    }

    fn add_input(&mut self, cell: &Cell) {
        self.inputs.push(cell.clone());
    }

    fn add_header_dep(&mut self, header: &Header) {
        self.header_deps.insert(*header.hash());
    }

    fn output_count(&self) -> usize {
        self.outputs.len()
    }
}
