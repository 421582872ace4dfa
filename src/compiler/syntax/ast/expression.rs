use std::fmt::Display;
use std::fmt::{self};
use std::rc::Rc;

use crate::util::common::Array;
use crate::util::pretty_format::indent;
use crate::util::pretty_format::PrettyFormat;

use super::crumb::Identifier;
use super::crumb::Literal;
use super::operator::Binary;
use super::operator::Unary;
use super::ty::DataType;

pub enum Expression {
    Identifier(Rc<Identifier>),

    IntLiteral(Rc<Literal>),
    FloatLiteral(Rc<Literal>),
    BoolLiteral(bool),

    Unary(Unary, Rc<Expression>),
    /// The type is the operand type annotated by the analyzer.
    Binary(Binary, Rc<DataType>, Rc<Expression>, Rc<Expression>),

    Call(Rc<Identifier>, Array<Expression>),
    Index(Rc<Identifier>, Rc<Expression>),
}

impl Expression {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Identifier(_) => "identifier",
            Expression::IntLiteral(_) => "integer literal",
            Expression::FloatLiteral(_) => "float literal",
            Expression::BoolLiteral(_) => "boolean literal",
            Expression::Unary(..) => "unary expression",
            Expression::Binary(..) => "binary expression",
            Expression::Call(..) => "call",
            Expression::Index(..) => "index",
        }
    }
}

impl PrettyFormat for Expression {
    fn pretty_format(&self, f: &mut fmt::Formatter, indentation_num: usize) -> fmt::Result {
        let indentation = indent(indentation_num);
        match self {
            Expression::Identifier(identifier) => writeln!(f, "{indentation}{identifier}"),
            Expression::IntLiteral(literal) | Expression::FloatLiteral(literal) => {
                writeln!(f, "{indentation}{literal}")
            }
            Expression::BoolLiteral(literal) => writeln!(f, "{indentation}{literal}"),
            Expression::Unary(operator, expression) => {
                writeln!(f, "{indentation}{operator}")?;
                expression.pretty_format(f, indentation_num + 1)
            }
            Expression::Binary(operator, data_type, left, right) => {
                writeln!(f, "{indentation}{operator} ({data_type})")?;
                left.pretty_format(f, indentation_num + 1)?;
                right.pretty_format(f, indentation_num + 1)
            }
            Expression::Call(callee, arguments) => {
                writeln!(f, "{indentation}Call {callee}")?;
                arguments
                    .iter()
                    .try_for_each(|argument| argument.pretty_format(f, indentation_num + 1))
            }
            Expression::Index(array, index) => {
                writeln!(f, "{indentation}Index {array}")?;
                index.pretty_format(f, indentation_num + 1)
            }
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pretty_format(f, 0)
    }
}
