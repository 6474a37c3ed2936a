//! # Representing linear programs
//!
//! This module contains the representation of linear programs in standard form, the form that the
//! simplex tableau is built from, as well as the solution that is derived once a program is fully
//! solved.
pub mod solution;
pub mod standard_form;
