//! Formula source parser
//!
//! This module transforms a single-line formula into an expression tree:
//! - [`lexer`]: tokenization (source text → tokens with source columns)
//! - [`stream`]: repositionable cursor with single-level pushback
//! - [`parse`]: parser coordinator and the top-level statement rule
//! - [`ast`]: expression tree definitions
//!
//! # Grammar
//!
//! ```text
//! statement  := IDENT "=" expression
//! expression := term (("+" | "-") expression)?
//! term       := factor (("*" | "/") term)?
//! factor     := INT | FLOAT | "(" expression ")" | "-" factor | IDENT
//! ```
//!
//! Hand-written recursive descent with stratified precedence; no parser
//! generator dependencies.

pub mod ast;
pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod stream;
