use ickb_primitives::{Cell, Script};

/// Page size for cell searches; stays under the node's query-size ceiling.
pub const DEFAULT_PAGE_SIZE: u32 = 400;

/// Which script of a cell the primary search script is matched against.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScriptType {
    Lock,
    Type,
}

/// How the search script is compared with cell scripts.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SearchMode {
    /// Args of the search script are a prefix of the cell script args.
    #[default]
    Prefix,
    /// Scripts must be equal.
    Exact,
    /// Args of the search script appear anywhere in the cell script args.
    Partial,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

/// A cell search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CellQuery {
    /// Primary search script.
    pub script: Script,

    /// Whether [`Self::script`] is matched against the lock or the type.
    pub script_type: ScriptType,

    /// Optional filter on the other script (the type when searching by lock, and vice versa).
    pub filter_script: Option<Script>,

    pub search_mode: SearchMode,

    /// Whether cell data is returned.
    pub with_data: bool,
}

impl CellQuery {
    /// Searches cells whose lock matches `lock`.
    pub fn by_lock(lock: Script) -> Self {
        Self {
            script: lock,
            script_type: ScriptType::Lock,
            filter_script: None,
            search_mode: SearchMode::default(),
            with_data: false,
        }
    }

    pub fn with_filter_script(mut self, script: Script) -> Self {
        self.filter_script = Some(script);
        self
    }

    pub fn with_search_mode(mut self, search_mode: SearchMode) -> Self {
        self.search_mode = search_mode;
        self
    }

    pub fn with_data(mut self, with_data: bool) -> Self {
        self.with_data = with_data;
        self
    }
}

/// Opaque position in a search, as returned by the node.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cursor(Vec<u8>);

impl Cursor {
    pub fn new(raw: Vec<u8>) -> Self {
        Self(raw)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// One page of search results.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CellPage {
    pub cells: Vec<Cell>,

    /// Cursor positioned after the last returned cell.
    pub last_cursor: Cursor,
}
