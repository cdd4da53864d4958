//! # Data structures
//!
//! The linear-algebra substrate and the problem descriptions built on top of it.
pub mod linear_algebra;
pub mod linear_program;
