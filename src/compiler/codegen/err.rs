use std::rc::Rc;

use crate::compiler::syntax::ast::crumb::Literal;

pub enum CodegenError {
    UnsupportedNodeKind(&'static str),
    UnresolvedPatchSite(usize),
    UnknownPatchSite(usize),

    IllegalIntegerLiteral(Rc<Literal>),
    IllegalFloatLiteral(Rc<Literal>),
    LiteralOutOfRange(i64),
    OperandOutOfRange(u64),
}
