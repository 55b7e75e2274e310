//! Coercion error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoerceError {
    #[error("cannot interpret {0} as a complex number")]
    TypeMismatch(&'static str),
}
