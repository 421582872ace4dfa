use std::fmt::Display;
use std::fmt::{self};
use std::io;
use std::rc::Rc;

use super::codegen::err::CodegenError;
use super::symbol::err::SymbolError;
use super::symbol::Offset;
use super::syntax::ast::crumb::Identifier;
use super::syntax::ast::crumb::Literal;

#[macro_export]
macro_rules! sys_error {
    ($($arg:tt)*) => {
        panic!($($arg)*)
    };
}

#[derive(Debug)]
pub enum CompileError {
    // Symbol Errors
    UndeclaredVariable(Rc<Identifier>),
    UnallocatedOffset(Offset),
    DuplicateAllocation(Rc<Identifier>),
    OffsetOutOfRange(Offset),

    // Codegen Errors
    UnsupportedNodeKind(&'static str),
    UnresolvedPatchSite(usize),
    UnknownPatchSite(usize),

    // Literal Errors
    IllegalIntegerLiteral(Rc<Literal>),
    IllegalFloatLiteral(Rc<Literal>),
    LiteralOutOfRange(i64),
    OperandOutOfRange(u64),

    // IO Errors
    ModuleWrite(io::Error),
}

impl CompileError {
    /// # Panics
    pub fn report(self) -> ! {
        panic!("{self}")
    }

    /// Errors raised by bad input text rather than by a broken upstream contract.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CompileError::IllegalIntegerLiteral(_)
                | CompileError::IllegalFloatLiteral(_)
                | CompileError::LiteralOutOfRange(_)
                | CompileError::OperandOutOfRange(_)
        )
    }
}

impl Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UndeclaredVariable(identifier) => {
                write!(f, "undeclared variable: {identifier}.")
            }
            CompileError::UnallocatedOffset(offset) => {
                write!(f, "no variable is allocated at offset {offset}.")
            }
            CompileError::DuplicateAllocation(identifier) => {
                write!(f, "variable {identifier} is already allocated.")
            }
            CompileError::OffsetOutOfRange(offset) => {
                write!(f, "offset {offset} is beyond the addressable data segment.")
            }
            CompileError::UnsupportedNodeKind(kind) => {
                write!(f, "code generation does not support node kind: {kind}.")
            }
            CompileError::UnresolvedPatchSite(index) => {
                write!(f, "patch site at word {index} was never resolved.")
            }
            CompileError::UnknownPatchSite(index) => {
                write!(f, "word {index} is not a pending patch site.")
            }
            CompileError::IllegalIntegerLiteral(literal) | CompileError::IllegalFloatLiteral(literal) => {
                write!(f, "encountering illegal literal: {literal}")
            }
            CompileError::LiteralOutOfRange(value) => {
                write!(f, "literal {value} does not fit in a signed halfword.")
            }
            CompileError::OperandOutOfRange(value) => {
                write!(f, "operand {value} does not fit in eight decimal digits.")
            }
            CompileError::ModuleWrite(error) => {
                write!(f, "failed to write module: {error}")
            }
        }
    }
}

impl From<SymbolError> for CompileError {
    fn from(value: SymbolError) -> Self {
        match value {
            SymbolError::UndeclaredVariable(identifier) => CompileError::UndeclaredVariable(identifier),
            SymbolError::UnallocatedOffset(offset) => CompileError::UnallocatedOffset(offset),
            SymbolError::DuplicateAllocation(identifier) => CompileError::DuplicateAllocation(identifier),
            SymbolError::OffsetOutOfRange(offset) => CompileError::OffsetOutOfRange(offset),
        }
    }
}

impl From<CodegenError> for CompileError {
    fn from(value: CodegenError) -> Self {
        match value {
            CodegenError::UnsupportedNodeKind(kind) => CompileError::UnsupportedNodeKind(kind),
            CodegenError::UnresolvedPatchSite(index) => CompileError::UnresolvedPatchSite(index),
            CodegenError::UnknownPatchSite(index) => CompileError::UnknownPatchSite(index),
            CodegenError::IllegalIntegerLiteral(literal) => CompileError::IllegalIntegerLiteral(literal),
            CodegenError::IllegalFloatLiteral(literal) => CompileError::IllegalFloatLiteral(literal),
            CodegenError::LiteralOutOfRange(value) => CompileError::LiteralOutOfRange(value),
            CodegenError::OperandOutOfRange(value) => CompileError::OperandOutOfRange(value),
        }
    }
}

impl From<io::Error> for CompileError {
    fn from(value: io::Error) -> Self {
        CompileError::ModuleWrite(value)
    }
}
