use std::fmt::Display;
use std::fmt::{self};
use std::rc::Rc;

use crate::util::common::Array;
use crate::util::pretty_format::indent;
use crate::util::pretty_format::PrettyFormat;

use super::crumb::Declaration;
use super::crumb::Identifier;
use super::expression::Expression;
use super::operator::Compound;

pub struct IfDetail {
    pub condition: Rc<Expression>,
    pub true_body: Rc<Statement>,
    pub false_body: Option<Rc<Statement>>,
}

pub enum Statement {
    Declare(Array<Declaration>),
    Assign(Rc<Identifier>, Rc<Expression>),
    CompoundAssign(Compound, Rc<Identifier>, Rc<Expression>),
    Input(Rc<Identifier>),
    Print(Rc<Expression>),
    If(IfDetail),
    Block(Array<Statement>),
}

impl PrettyFormat for Declaration {
    fn pretty_format(&self, f: &mut fmt::Formatter, indentation_num: usize) -> fmt::Result {
        let indentation = indent(indentation_num);
        match self {
            Declaration::Variable(variable) => writeln!(f, "{indentation}{variable}"),
            Declaration::Group(declarations) => declarations
                .iter()
                .try_for_each(|declaration| declaration.pretty_format(f, indentation_num + 1)),
        }
    }
}

impl PrettyFormat for Statement {
    fn pretty_format(&self, f: &mut fmt::Formatter, indentation_num: usize) -> fmt::Result {
        let indentation = indent(indentation_num);
        match self {
            Statement::Declare(declarations) => {
                writeln!(f, "{indentation}Declare")?;
                declarations
                    .iter()
                    .try_for_each(|declaration| declaration.pretty_format(f, indentation_num + 1))
            }
            Statement::Assign(identifier, expression) => {
                writeln!(f, "{indentation}Assign {identifier}")?;
                expression.pretty_format(f, indentation_num + 1)
            }
            Statement::CompoundAssign(operator, identifier, expression) => {
                writeln!(f, "{indentation}{identifier} {operator}")?;
                expression.pretty_format(f, indentation_num + 1)
            }
            Statement::Input(identifier) => writeln!(f, "{indentation}Input {identifier}"),
            Statement::Print(expression) => {
                writeln!(f, "{indentation}Print")?;
                expression.pretty_format(f, indentation_num + 1)
            }
            Statement::If(IfDetail {
                condition,
                true_body,
                false_body,
            }) => {
                writeln!(f, "{indentation}If")?;
                condition.pretty_format(f, indentation_num + 1)?;
                writeln!(f, "{indentation}Then")?;
                true_body.pretty_format(f, indentation_num + 1)?;
                if let Some(false_body) = false_body {
                    writeln!(f, "{indentation}Else")?;
                    false_body.pretty_format(f, indentation_num + 1)?;
                }
                Ok(())
            }
            Statement::Block(statements) => statements
                .iter()
                .try_for_each(|statement| statement.pretty_format(f, indentation_num)),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pretty_format(f, 0)
    }
}
