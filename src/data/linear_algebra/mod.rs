//! # Linear algebra primitives
//!
//! The tableau stores its state in a dense format; this module provides the matrix type and the
//! elementary row operations it is manipulated with.

pub mod matrix;
