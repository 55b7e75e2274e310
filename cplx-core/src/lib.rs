pub mod coerce;
pub mod complex;
pub mod error;

pub use complex::Complex;
pub use error::CoerceError;
