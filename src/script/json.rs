use serde_json::{Number, Value};
use tracing::trace;

use super::Variant;
use crate::{Result, ScriptError};

impl From<&Variant> for Value {
    fn from(variant: &Variant) -> Value {
        match variant {
            Variant::String(s) => Value::String(s.to_string_lossy()),
            // JSON has no NaN or infinity representation.
            Variant::Number(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
            Variant::Boolean(b) => Value::Bool(*b),
            Variant::Null => Value::Null,
        }
    }
}

impl From<Variant> for Value {
    fn from(variant: Variant) -> Value {
        Value::from(&variant)
    }
}

impl From<&Value> for Variant {
    fn from(value: &Value) -> Variant {
        match value {
            Value::Null => Variant::Null,
            Value::Bool(b) => Variant::Boolean(*b),
            Value::Number(n) => Variant::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => Variant::from(s.as_str()),
            Value::Array(_) | Value::Object(_) => {
                trace!("Collapsing composite JSON value to null");
                Variant::Null
            }
        }
    }
}

impl From<Value> for Variant {
    fn from(value: Value) -> Variant {
        Variant::from(&value)
    }
}

impl Variant {
    /// Strict form of the JSON conversion: composites are an error rather
    /// than collapsing to null.
    pub fn try_from_json(value: &Value) -> Result<Variant> {
        match value {
            Value::Array(_) => Err(ScriptError::UnsupportedJson("array")),
            Value::Object(_) => Err(ScriptError::UnsupportedJson("object")),
            scalar => Ok(Variant::from(scalar)),
        }
    }
}
