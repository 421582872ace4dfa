use super::symbol::SymbolTable;

/// State shared by one compilation unit, threaded through code generation.
pub struct Context {
    pub symbol_table: SymbolTable,
}

impl Context {
    #[must_use]
    pub fn new() -> Context {
        Context {
            symbol_table: SymbolTable::new(),
        }
    }

    /// Starts from a table the semantic analyzer already populated.
    #[must_use]
    pub fn with_symbol_table(symbol_table: SymbolTable) -> Context {
        Context { symbol_table }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
