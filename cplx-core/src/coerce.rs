//! Coercion from complex-like inputs.
//!
//! Operand types known at compile time convert infallibly through `From`;
//! the binary operators accept any `Into<Complex>` right-hand side, so
//! `Into` is the single normalization point they all share. Inputs whose
//! type is only known at run time go through [`Complex::coerce`], which
//! rejects anything that cannot be read as a complex number.

use crate::error::CoerceError;
use crate::Complex;
use serde_json::Value;

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

impl From<f32> for Complex {
    #[inline]
    fn from(re: f32) -> Self {
        Self {
            re: re as f64,
            im: 0.0,
        }
    }
}

impl From<i32> for Complex {
    #[inline]
    fn from(re: i32) -> Self {
        Self {
            re: re as f64,
            im: 0.0,
        }
    }
}

impl From<i64> for Complex {
    #[inline]
    fn from(re: i64) -> Self {
        Self {
            re: re as f64,
            im: 0.0,
        }
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}

impl Complex {
    /// Coerce a dynamically typed value into a `Complex`.
    ///
    /// Accepts a number (taken as the real part), a two-element numeric
    /// array `[re, im]`, or the type's own serialized form
    /// `{"re": .., "im": ..}`. Anything else is a caller-usage error
    /// reported as [`CoerceError::TypeMismatch`] with the rejected type's
    /// name.
    pub fn coerce(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Number(n) => {
                let re = n
                    .as_f64()
                    .ok_or(CoerceError::TypeMismatch("number"))?;
                Ok(Self { re, im: 0.0 })
            }
            Value::Array(items) => match items.as_slice() {
                [re, im] => {
                    let re = re
                        .as_f64()
                        .ok_or(CoerceError::TypeMismatch("array"))?;
                    let im = im
                        .as_f64()
                        .ok_or(CoerceError::TypeMismatch("array"))?;
                    Ok(Self { re, im })
                }
                _ => Err(CoerceError::TypeMismatch("array")),
            },
            Value::Object(map) => {
                let field = |key: &str| {
                    map.get(key)
                        .and_then(Value::as_f64)
                        .ok_or(CoerceError::TypeMismatch("object"))
                };
                Ok(Self {
                    re: field("re")?,
                    im: field("im")?,
                })
            }
            Value::Null => Err(CoerceError::TypeMismatch("null")),
            Value::Bool(_) => Err(CoerceError::TypeMismatch("boolean")),
            Value::String(_) => Err(CoerceError::TypeMismatch("string")),
        }
    }
}
