use std::fmt::Display;
use std::fmt::{self};

use crate::util::common::Array;
use crate::util::pretty_format::PrettyFormat;

use self::statement::Statement;

pub mod crumb;
pub mod expression;
pub mod operator;
pub mod statement;
pub mod ty;

/// Root of a compilation unit as handed over by the semantic analyzer.
pub struct Program {
    pub statements: Array<Statement>,
}

impl Program {
    #[must_use]
    pub fn new(statements: Array<Statement>) -> Program {
        Program { statements }
    }
}

impl PrettyFormat for Program {
    fn pretty_format(&self, f: &mut fmt::Formatter, indentation_num: usize) -> fmt::Result {
        self.statements
            .iter()
            .try_for_each(|statement| statement.pretty_format(f, indentation_num))
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pretty_format(f, 0)
    }
}
