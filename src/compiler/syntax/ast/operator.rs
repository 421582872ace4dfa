use std::fmt::Display;
use std::fmt::{self};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Unary {
    LogicalNot,
    Negative,
}

impl Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Unary::LogicalNot => "LogicalNot",
            Unary::Negative => "Negative",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Binary {
    Add,
    Subtract,
    Multiply,
    Divide,

    LogicalAnd,
    LogicalOr,

    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
}

impl Binary {
    #[must_use]
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Binary::Equal
                | Binary::NotEqual
                | Binary::LessThan
                | Binary::LessThanEqual
                | Binary::GreaterThan
                | Binary::GreaterThanEqual
        )
    }
}

impl Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Binary::Add => "Add",
            Binary::Subtract => "Subtract",
            Binary::Multiply => "Multiply",
            Binary::Divide => "Divide",
            Binary::LogicalAnd => "LogicalAnd",
            Binary::LogicalOr => "LogicalOr",
            Binary::Equal => "Equal",
            Binary::NotEqual => "NotEqual",
            Binary::LessThan => "LessThan",
            Binary::LessThanEqual => "LessThanEqual",
            Binary::GreaterThan => "GreaterThan",
            Binary::GreaterThanEqual => "GreaterThanEqual",
        };
        write!(f, "{s}")
    }
}

/// Operator of a compound assignment such as `x += e`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Compound {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Compound::Add => "+=",
            Compound::Subtract => "-=",
            Compound::Multiply => "*=",
            Compound::Divide => "/=",
        };
        write!(f, "{s}")
    }
}
