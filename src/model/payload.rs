use serde_json::{Map, Value};

/// Borrowed, typed view over an arbitrary step input.
///
/// The preview formatter consumes inputs exclusively through this enum, so
/// every shape a monitor can send is handled by an exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    Null,
    /// String, number or boolean
    Scalar(&'a Value),
    /// Key/value pairs in declared order
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
}

impl<'a> Payload<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Null => Payload::Null,
            Value::Object(map) => Payload::Object(map),
            Value::Array(items) => Payload::Array(items),
            scalar @ (Value::Bool(_) | Value::Number(_) | Value::String(_)) => {
                Payload::Scalar(scalar)
            }
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Payload::Null)
    }

    /// Splits the payload into independent preview items: array elements
    /// become one item each, anything else is a single item.
    pub fn items(&self) -> Vec<Payload<'a>> {
        match self {
            Payload::Array(items) => items.iter().map(Payload::of).collect(),
            other => vec![*other],
        }
    }
}
