use std::rc::Rc;

use crate::compiler::syntax::ast::crumb::Identifier;

use super::Offset;

pub enum SymbolError {
    UndeclaredVariable(Rc<Identifier>),
    UnallocatedOffset(Offset),
    DuplicateAllocation(Rc<Identifier>),
    OffsetOutOfRange(Offset),
}
