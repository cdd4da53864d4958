//! # Linear algebra
//!
//! Vectors, matrices and block composition. All values are `f64`; the algorithms in this crate
//! interact with matrices exclusively through the `Matrix` trait defined in the `matrix` module.
pub mod matrix;
pub mod vector;
