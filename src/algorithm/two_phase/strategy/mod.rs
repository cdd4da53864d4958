//! # Strategies
//!
//! Decisions that parameterize the Simplex method without changing its structure.
pub mod pivot_rule;
