//! A small numeric vector type with the basic operations of linear algebra.
//!
//! ```
//! use vectores::Vector;
//!
//! let v1 = Vector::from_vec(vec![1, 2, 3]);
//! let v2 = Vector::from_vec(vec![4, 5, 6]);
//! assert_eq!((&v1 * 2).to_string(), "Vector([2, 4, 6])");
//! assert_eq!(v1.hadamard(&v2)?.to_string(), "Vector([4.0, 10.0, 18.0])");
//! assert_eq!(v1.dot(&v2)?, 32);
//!
//! let v1 = Vector::from_vec(vec![2.0, 1.0, 2.0]);
//! let v2 = Vector::from_vec(vec![0.5, 1.0, 0.5]);
//! assert_eq!(v1.project(&v2)?.to_string(), "Vector([1.0, 2.0, 1.0])");
//! assert_eq!(v1.reject(&v2)?.to_string(), "Vector([1.0, -1.0, 1.0])");
//! # Ok::<(), vectores::VectorError>(())
//! ```

pub mod component;
pub mod operand;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("Dimension Mismatch: left operand has {left} components, right has {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("Division By Zero: cannot project onto a zero vector")]
    DivisionByZero,
    #[error("Unsupported Operand Type: expected a number or a vector, found {found}")]
    UnsupportedOperandType { found: String },
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use component::{Component, ROUND_DIGITS};
pub use operand::{Operand, Product};
pub use vector::Vector;
