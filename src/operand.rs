//! Right-hand operands for [`Vector::multiply`] and the products it returns.
//!
//! Multiplying by a number scales the vector; multiplying by another vector
//! takes the Hadamard product. [`Operand`] carries that choice explicitly.
//! When the operand comes from untyped input (JSON), anything that is
//! neither a number nor an array of numbers is rejected with
//! [`VectorError::UnsupportedOperandType`].

use crate::component::Component;
use crate::vector::Vector;
use crate::VectorError;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Operand<T: Component> {
    Scalar(T),
    Vector(Vector<T>),
}

impl<T: Component> From<Vector<T>> for Operand<T> {
    fn from(vector: Vector<T>) -> Self {
        Operand::Vector(vector)
    }
}

macro_rules! scalar_operand {
    ($($t:ty),*) => {$(
        impl From<$t> for Operand<$t> {
            fn from(k: $t) -> Self {
                Operand::Scalar(k)
            }
        }
    )*};
}

scalar_operand!(i32, i64, f32, f64);

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unsupported(found: impl Into<String>) -> VectorError {
    let found = found.into();
    log::debug!("unsupported multiply operand: {found}");
    VectorError::UnsupportedOperandType { found }
}

fn number_to_component<T: Component>(value: &Value) -> Result<T, VectorError> {
    let number = match value {
        Value::Number(n) => n,
        other => return Err(unsupported(json_kind(other))),
    };
    // Integers go through i64 first so values beyond 2^53 stay exact
    number
        .as_i64()
        .and_then(T::from_i64_exact)
        .or_else(|| number.as_f64().and_then(T::from_f64_exact))
        .ok_or_else(|| {
            unsupported(format!(
                "number {number} not representable as {}",
                std::any::type_name::<T>()
            ))
        })
}

impl<T: Component> TryFrom<&Value> for Operand<T> {
    type Error = VectorError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(_) => number_to_component(value).map(Operand::Scalar),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Number(_) => number_to_component(item),
                    other => Err(unsupported(format!("array of {}", json_kind(other)))),
                })
                .collect::<Result<Vector<T>, _>>()
                .map(Operand::Vector),
            other => Err(unsupported(json_kind(other))),
        }
    }
}

/// Result of [`Vector::multiply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Product<T: Component> {
    Scaled(Vector<T>),
    Hadamard(Vector<f64>),
}

impl<T: Component> Product<T> {
    pub fn into_f64(self) -> Vector<f64> {
        match self {
            Product::Scaled(v) => v.to_f64(),
            Product::Hadamard(v) => v,
        }
    }
}

impl<T: Component> fmt::Display for Product<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::Scaled(v) => fmt::Display::fmt(v, f),
            Product::Hadamard(v) => fmt::Display::fmt(v, f),
        }
    }
}
