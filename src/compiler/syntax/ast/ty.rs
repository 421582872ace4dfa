use std::fmt::Display;
use std::fmt::{self};
use std::rc::Rc;

use crate::util::common::Array;

use super::crumb::Identifier;

pub struct Field(pub Rc<Identifier>, pub Rc<DataType>);

pub enum DataType {
    Integer,
    Float,
    Boolean,
    Record {
        name: Rc<Identifier>,
        fields: Array<Field>,
    },
    Array {
        element: Rc<DataType>,
        length: u32,
    },
}

impl DataType {
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Float | DataType::Boolean)
    }
}

impl PartialEq for DataType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DataType::Integer, DataType::Integer)
            | (DataType::Float, DataType::Float)
            | (DataType::Boolean, DataType::Boolean) => true,
            (DataType::Record { name: n1, .. }, DataType::Record { name: n2, .. }) => n1 == n2,
            (
                DataType::Array {
                    element: e1,
                    length: l1,
                },
                DataType::Array {
                    element: e2,
                    length: l2,
                },
            ) => l1 == l2 && e1 == e2,
            (_, _) => false,
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Integer => write!(f, "INTEGER"),
            DataType::Float => write!(f, "FLOAT"),
            DataType::Boolean => write!(f, "BOOLEAN"),
            DataType::Record { name, fields } => {
                let fields = fields
                    .iter()
                    .map(|field| {
                        let Field(field_name, field_type) = field.as_ref();
                        format!("{field_name}: {field_type}")
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{name} {{ {fields} }}")
            }
            DataType::Array { element, length } => write!(f, "[{element}; {length}]"),
        }
    }
}

impl fmt::Debug for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}
