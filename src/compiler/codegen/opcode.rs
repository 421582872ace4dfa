use std::collections::HashMap;
use std::fmt::Display;
use std::fmt::{self};

use once_cell::sync::Lazy;

use crate::compiler::syntax::ast::operator::Binary;
use crate::compiler::syntax::ast::operator::Compound;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Opcode {
    // control
    Halt,
    Branch,
    BranchFalse,
    BranchTrue,

    // memory and immediates
    Alloc,
    Store,
    LoadHalfword,
    True,
    False,

    // arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    ToFloat,

    // comparison against zero of the difference on top of the stack
    GreaterThan,
    GreaterEqual,
    LessThan,
    LessEqual,
    Equal,
    NotEqual,

    // logical
    And,
    Or,
    Not,

    // io
    ReadInteger,
    ReadFloat,
    PrintValue,
    NewLine,

    // base register select: address or value relative to register 0 / 1
    LoadAddress0,
    LoadAddress1,
    LoadValue0,
    LoadValue1,
}

const ALL_OPCODE: [Opcode; 31] = [
    Opcode::Halt,
    Opcode::Branch,
    Opcode::BranchFalse,
    Opcode::BranchTrue,
    Opcode::Alloc,
    Opcode::Store,
    Opcode::LoadHalfword,
    Opcode::True,
    Opcode::False,
    Opcode::Add,
    Opcode::Subtract,
    Opcode::Multiply,
    Opcode::Divide,
    Opcode::ToFloat,
    Opcode::GreaterThan,
    Opcode::GreaterEqual,
    Opcode::LessThan,
    Opcode::LessEqual,
    Opcode::Equal,
    Opcode::NotEqual,
    Opcode::And,
    Opcode::Or,
    Opcode::Not,
    Opcode::ReadInteger,
    Opcode::ReadFloat,
    Opcode::PrintValue,
    Opcode::NewLine,
    Opcode::LoadAddress0,
    Opcode::LoadAddress1,
    Opcode::LoadValue0,
    Opcode::LoadValue1,
];

static OPCODE_MAP: Lazy<HashMap<&'static str, Opcode>> = Lazy::new(|| {
    ALL_OPCODE
        .iter()
        .map(|opcode| (opcode.mnemonic(), *opcode))
        .collect()
});

impl Opcode {
    #[must_use]
    pub fn all() -> &'static [Opcode] {
        &ALL_OPCODE
    }

    #[must_use]
    pub fn of(mnemonic: &str) -> Option<Opcode> {
        OPCODE_MAP.get(mnemonic).copied()
    }

    #[must_use]
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Halt => "HALT",
            Opcode::Branch => "BR",
            Opcode::BranchFalse => "BF",
            Opcode::BranchTrue => "BT",
            Opcode::Alloc => "ALLOC",
            Opcode::Store => "ST",
            Opcode::LoadHalfword => "LH",
            Opcode::True => "TRUE",
            Opcode::False => "FALSE",
            Opcode::Add => "ADD",
            Opcode::Subtract => "SUB",
            Opcode::Multiply => "MUL",
            Opcode::Divide => "DIV",
            Opcode::ToFloat => "FLT",
            Opcode::GreaterThan => "GT",
            Opcode::GreaterEqual => "GE",
            Opcode::LessThan => "LT",
            Opcode::LessEqual => "LE",
            Opcode::Equal => "EQ",
            Opcode::NotEqual => "NE",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Not => "NOT",
            Opcode::ReadInteger => "READI",
            Opcode::ReadFloat => "READF",
            Opcode::PrintValue => "VALPR",
            Opcode::NewLine => "NEWLN",
            Opcode::LoadAddress0 => "LA0",
            Opcode::LoadAddress1 => "LA1",
            Opcode::LoadValue0 => "LV0",
            Opcode::LoadValue1 => "LV1",
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Opcode::Halt => "00",
            Opcode::Branch => "01",
            Opcode::BranchFalse => "02",
            Opcode::BranchTrue => "03",
            Opcode::Alloc => "10",
            Opcode::Store => "11",
            Opcode::LoadHalfword => "12",
            Opcode::True => "13",
            Opcode::False => "14",
            Opcode::Add => "20",
            Opcode::Subtract => "21",
            Opcode::Multiply => "22",
            Opcode::Divide => "23",
            Opcode::ToFloat => "24",
            Opcode::GreaterThan => "30",
            Opcode::GreaterEqual => "31",
            Opcode::LessThan => "32",
            Opcode::LessEqual => "33",
            Opcode::Equal => "34",
            Opcode::NotEqual => "35",
            Opcode::And => "40",
            Opcode::Or => "41",
            Opcode::Not => "42",
            Opcode::ReadInteger => "50",
            Opcode::ReadFloat => "51",
            Opcode::PrintValue => "52",
            Opcode::NewLine => "53",
            Opcode::LoadAddress0 => "60",
            Opcode::LoadAddress1 => "61",
            Opcode::LoadValue0 => "62",
            Opcode::LoadValue1 => "63",
        }
    }
}

impl From<Compound> for Opcode {
    fn from(value: Compound) -> Self {
        match value {
            Compound::Add => Opcode::Add,
            Compound::Subtract => Opcode::Subtract,
            Compound::Multiply => Opcode::Multiply,
            Compound::Divide => Opcode::Divide,
        }
    }
}

/// Comparisons map to the relational test applied after `SUB`.
impl From<Binary> for Opcode {
    fn from(value: Binary) -> Self {
        match value {
            Binary::Add => Opcode::Add,
            Binary::Subtract => Opcode::Subtract,
            Binary::Multiply => Opcode::Multiply,
            Binary::Divide => Opcode::Divide,
            Binary::LogicalAnd => Opcode::And,
            Binary::LogicalOr => Opcode::Or,
            Binary::Equal => Opcode::Equal,
            Binary::NotEqual => Opcode::NotEqual,
            Binary::LessThan => Opcode::LessThan,
            Binary::LessThanEqual => Opcode::LessEqual,
            Binary::GreaterThan => Opcode::GreaterThan,
            Binary::GreaterThanEqual => Opcode::GreaterEqual,
        }
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
