//! Formula evaluation
//!
//! This module provides the evaluation half of the pipeline:
//! - [`eval`]: tree-walking evaluator and symbol table
//! - [`errors`]: evaluation error types
//!
//! # Evaluation Model
//!
//! The evaluator walks the expression tree bottom-up, resolving identifiers
//! against a symbol table of named `f64` variables. The top-level assignment
//! commits its result into the table. Division by zero and undefined
//! variables are reported errors, never silent infinities or defaults.

pub mod errors;
pub mod eval;
