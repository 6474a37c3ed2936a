//! # A linear program solver
//!
//! Linear programs in standard form are solved using Dantzig's Simplex Method, as described in
//! chapter 2 of Combinatorial Optimization, a book by Christos H. Papadimitriou and Kenneth
//! Steiglitz. The solver works on a dense tableau and uses the two-phase method for problems that
//! lack an obvious feasible basis.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
