use std::fmt::Display;
use std::fmt::{self};
use std::rc::Rc;

use crate::util::common::Array;

use super::ty::DataType;

pub type Identifier = String;

/// Raw source text of a literal, exactly as the scanner saw it.
pub type Literal = String;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Position { line, column } = self;
        write!(f, "{line}:{column}")
    }
}

pub struct Variable(pub Rc<Identifier>, pub Rc<DataType>, pub Position);

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Variable(identifier, data_type, position) = self;
        write!(f, "{identifier} as {data_type} @ {position}")
    }
}

pub enum Declaration {
    Variable(Variable),
    Group(Array<Declaration>),
}

impl Declaration {
    /// Collects every variable below this declaration in source order.
    pub fn flatten<'a>(&'a self, variables: &mut Vec<&'a Variable>) {
        match self {
            Declaration::Variable(variable) => variables.push(variable),
            Declaration::Group(declarations) => declarations
                .iter()
                .for_each(|declaration| declaration.flatten(variables)),
        }
    }
}
