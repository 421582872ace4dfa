use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::constants::common::MAX_OPERAND;
use crate::CompileResult;

use self::err::SymbolError;

use super::syntax::ast::crumb::Identifier;
use super::syntax::ast::ty::DataType;

pub mod err;

/// Memory cell index relative to the data segment base.
pub type Offset = u32;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct SymbolFlags {
    pub initialized: bool,
    pub function: bool,
    pub constant: bool,
    pub array: bool,
}

#[derive(Debug)]
pub struct SymbolEntry {
    pub name: Rc<Identifier>,
    pub data_type: Option<Rc<DataType>>,
    pub offset: Option<Offset>,
    pub flags: SymbolFlags,
}

impl SymbolEntry {
    fn new(name: Rc<Identifier>) -> SymbolEntry {
        SymbolEntry {
            name,
            data_type: None,
            offset: None,
            flags: SymbolFlags::default(),
        }
    }

    /// Entries the analyzer left untyped are treated as integers.
    #[must_use]
    pub fn data_type(&self) -> Rc<DataType> {
        self.data_type
            .clone()
            .unwrap_or_else(|| Rc::new(DataType::Integer))
    }

    /// # Errors
    pub fn placed_offset(&self) -> CompileResult<Offset> {
        self.offset
            .ok_or_else(|| SymbolError::UndeclaredVariable(self.name.clone()).into())
    }
}

/// Flat symbol table of the single global frame.
///
/// Offsets are handed out by a bump pointer and never reused: the N-th
/// allocated variable lives at offset N - 1.
pub struct SymbolTable {
    entries: HashMap<Identifier, SymbolEntry>,
    offset_index: HashMap<Offset, Rc<Identifier>>,
    next_offset: Offset,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> SymbolTable {
        SymbolTable {
            entries: HashMap::new(),
            offset_index: HashMap::new(),
            next_offset: 0,
        }
    }

    /// Records `data_type` for `name`, creating the entry if needed.
    pub fn declare(&mut self, name: Rc<Identifier>, data_type: Rc<DataType>) {
        let entry = self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| SymbolEntry::new(name));
        entry.flags.array = matches!(data_type.as_ref(), DataType::Array { .. });
        entry.data_type = Some(data_type);
    }

    /// # Errors
    pub fn allocate(&mut self, name: Rc<Identifier>) -> CompileResult<Offset> {
        let offset = self.next_offset;
        self.place(name, offset)?;
        Ok(offset)
    }

    /// # Errors
    pub fn set_offset(&mut self, name: Rc<Identifier>, offset: Offset) -> CompileResult<()> {
        self.place(name, offset)
    }

    fn place(&mut self, name: Rc<Identifier>, offset: Offset) -> CompileResult<()> {
        if offset > MAX_OPERAND {
            return Err(SymbolError::OffsetOutOfRange(offset).into());
        }
        if self.offset_index.contains_key(&offset) {
            return Err(SymbolError::DuplicateAllocation(name).into());
        }
        let entry = self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| SymbolEntry::new(name.clone()));
        if entry.offset.is_some() {
            return Err(SymbolError::DuplicateAllocation(name).into());
        }
        entry.offset = Some(offset);
        self.offset_index.insert(offset, name.clone());
        self.next_offset = self.next_offset.max(offset + 1);
        debug!("allocated {name} at offset {offset}");
        Ok(())
    }

    /// # Errors
    pub fn lookup(&self, name: &str) -> CompileResult<&SymbolEntry> {
        self.entries
            .get(name)
            .ok_or_else(|| SymbolError::UndeclaredVariable(Rc::new(name.to_string())).into())
    }

    /// # Errors
    pub fn lookup_by_offset(&self, offset: Offset) -> CompileResult<&SymbolEntry> {
        let Some(name) = self.offset_index.get(&offset) else {
            return Err(SymbolError::UnallocatedOffset(offset).into());
        };
        self.lookup(name)
    }

    /// # Errors
    pub fn mark_initialized(&mut self, name: &str) -> CompileResult<()> {
        let Some(entry) = self.entries.get_mut(name) else {
            return Err(SymbolError::UndeclaredVariable(Rc::new(name.to_string())).into());
        };
        entry.flags.initialized = true;
        Ok(())
    }

    /// Number of offsets consumed so far, holes from `set_offset` included.
    #[must_use]
    pub fn allocated(&self) -> Offset {
        self.next_offset
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
