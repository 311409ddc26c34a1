//! Square integer matrices and the building blocks of the Strassen
//! recursion.
//!
//! - `dense`: the [`Matrix`] type itself
//! - `quadrant`: quadrant extraction, addition and subtraction
//! - `naive`: classical triple-loop multiplication (the recursion base case)
//! - `padding`: power-of-two padding and trimming

pub mod dense;
pub mod naive;
pub mod padding;
pub mod quadrant;

pub use dense::{Element, Matrix};
