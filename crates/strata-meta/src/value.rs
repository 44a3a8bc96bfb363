//! Values going into and coming out of the store.

use strata_units::{Magnitude, Property, PropertyInput, Quantity, Unit};

use crate::ColumnKind;

/// Text to write: one label for every selected element, or one each.
#[derive(Debug, Clone, PartialEq)]
pub enum TextInput {
    /// Broadcast to every selected element.
    One(String),
    /// One label per selected element.
    Many(Vec<String>),
}

/// Anything the store can write.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// Numbers, bare or with a unit.
    Numeric(PropertyInput),
    /// Labels.
    Text(TextInput),
}

impl FieldInput {
    /// Storage kind this input needs.
    pub fn kind(&self) -> ColumnKind {
        match self {
            FieldInput::Numeric(_) => ColumnKind::Numeric,
            FieldInput::Text(_) => ColumnKind::Text,
        }
    }
}

macro_rules! numeric_input {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldInput {
                fn from(value: $ty) -> Self {
                    FieldInput::Numeric(PropertyInput::from(value))
                }
            }
        )*
    };
}

numeric_input!(
    f64,
    Vec<f64>,
    Magnitude,
    Quantity,
    (f64, Unit),
    (Vec<f64>, Unit),
    Property,
    Option<f64>,
);

impl From<PropertyInput> for FieldInput {
    fn from(value: PropertyInput) -> Self {
        FieldInput::Numeric(value)
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        FieldInput::Text(TextInput::One(value.to_string()))
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        FieldInput::Text(TextInput::One(value))
    }
}

impl From<Vec<String>> for FieldInput {
    fn from(values: Vec<String>) -> Self {
        FieldInput::Text(TextInput::Many(values))
    }
}

impl From<Vec<&str>> for FieldInput {
    fn from(values: Vec<&str>) -> Self {
        FieldInput::Text(TextInput::Many(
            values.into_iter().map(str::to_string).collect(),
        ))
    }
}

/// The selected slice of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValues {
    /// Numbers with their unit, always as an array.
    Numeric(Quantity),
    /// Labels.
    Text(Vec<String>),
}

impl FieldValues {
    /// Numeric values, if this is a numeric read.
    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            FieldValues::Numeric(q) => Some(q),
            FieldValues::Text(_) => None,
        }
    }

    /// Numbers as a slice, if this is a numeric read.
    pub fn as_numbers(&self) -> Option<&[f64]> {
        self.as_quantity().map(|q| q.magnitude.values())
    }

    /// Labels, if this is a text read.
    pub fn as_text(&self) -> Option<&[String]> {
        match self {
            FieldValues::Text(labels) => Some(labels),
            FieldValues::Numeric(_) => None,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            FieldValues::Numeric(q) => q.magnitude.len(),
            FieldValues::Text(labels) => labels.len(),
        }
    }

    /// True if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
