//! # Introduction
//!
//! Formuline parses and evaluates single-line assignment formulas of the form
//! `IDENT = expression`, where the expression combines numbers, identifiers,
//! parentheses, unary negation, and the binary operators `+ - * /`.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → TokenStream → Parser → AST → Evaluator → SymbolTable
//! ```
//!
//! 1. [`parser`] — tokenises the line and builds the expression tree.
//! 2. [`interpreter`] — walks the tree and commits the assignment into a
//!    symbol table of named `f64` variables.
//!
//! ## Grammar
//!
//! ```text
//! statement  := IDENT "=" expression
//! expression := term (("+" | "-") expression)?
//! term       := factor (("*" | "/") term)?
//! factor     := INT | FLOAT | "(" expression ")" | "-" factor | IDENT
//! ```
//!
//! The right-recursive `expression` and `term` rules make chained `+ - * /`
//! group to the right: `10-3-2` evaluates as `10-(3-2)`. This grouping is
//! part of the language definition and is pinned by tests.
//!
//! ## Example
//!
//! ```
//! let (name, value) = formuline::run("A = 2 + 3 * 4").unwrap();
//! assert_eq!(name, "A");
//! assert_eq!(value, 14.0);
//! ```

pub mod interpreter;
pub mod parser;

use std::fmt;

use interpreter::errors::EvalError;
use interpreter::eval::Evaluator;
use parser::ast::{BinOp, Expr, LiteralKind};
use parser::parse::{ParseError, Parser};

/// Top-level error for a full parse-and-evaluate run
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Parse(ParseError),
    Eval(EvalError),
}

impl Error {
    /// Source column the error points at, when one is known. Evaluation
    /// errors carry no column since the offending tree node may come from
    /// anywhere in the line.
    pub fn column(&self) -> Option<usize> {
        match self {
            Error::Parse(err) => Some(err.column()),
            Error::Eval(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "{}", err),
            Error::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::Eval(err)
    }
}

/// Parse and evaluate one formula against a fresh symbol table.
///
/// Returns the assigned variable's name and its committed value. A malformed
/// formula produces no partial tree and no symbol table mutation, just the
/// first error encountered.
pub fn run(source: &str) -> Result<(String, f64), Error> {
    let mut parser = Parser::new(source)?;
    let statement = parser.parse_statement()?;

    let mut evaluator = Evaluator::new();
    let value = evaluator.evaluate(&statement)?;

    let name = match &statement {
        Expr::Binary {
            op: BinOp::Assign,
            left,
            ..
        } => match left.as_ref() {
            Expr::Literal {
                text,
                kind: LiteralKind::Identifier,
            } => text.clone(),
            _ => unreachable!("statement root always assigns to an identifier"),
        },
        _ => unreachable!("parse_statement always returns an assignment root"),
    };

    Ok((name, value))
}
