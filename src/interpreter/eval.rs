//! Tree-walking evaluator
//!
//! Walks the parsed [`Expr`] tree and computes a floating point result. The
//! top-level assignment node commits its right-hand value into the symbol
//! table under the left-hand identifier's name and yields that value.
//!
//! One [`Evaluator`] owns the symbol table for one run; nothing is shared
//! between runs.

use rustc_hash::FxHashMap;

use crate::interpreter::errors::EvalError;
use crate::parser::ast::{BinOp, Expr, LiteralKind, UnOp};

/// Named numeric variables, keyed by identifier
pub type SymbolTable = FxHashMap<String, f64>;

/// Tree-walking evaluator holding the symbol table for one run
#[derive(Debug, Default)]
pub struct Evaluator {
    symbols: SymbolTable,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the symbol table.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Seed a variable before evaluation.
    pub fn define(&mut self, name: &str, value: f64) {
        self.symbols.insert(name.to_string(), value);
    }

    /// Evaluate an expression tree and return its numeric value.
    ///
    /// The right side of an assignment is fully evaluated before the table
    /// is touched, so a failed run never mutates the table.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<f64, EvalError> {
        match expr {
            Expr::Literal { text, kind } => match kind {
                LiteralKind::Integer | LiteralKind::Float => {
                    text.parse::<f64>().map_err(|_| EvalError::MalformedLiteral {
                        text: text.clone(),
                    })
                }
                LiteralKind::Identifier => self
                    .symbols
                    .get(text)
                    .copied()
                    .ok_or_else(|| EvalError::UndefinedVariable { name: text.clone() }),
            },

            Expr::Unary {
                op: UnOp::Neg,
                operand,
            } => Ok(-self.evaluate(operand)?),

            Expr::Binary { op, left, right } => match op {
                BinOp::Assign => {
                    let name = match left.as_ref() {
                        Expr::Literal {
                            text,
                            kind: LiteralKind::Identifier,
                        } => text.clone(),
                        _ => return Err(EvalError::InvalidAssignmentTarget),
                    };

                    let value = self.evaluate(right)?;
                    self.symbols.insert(name, value);
                    Ok(value)
                }

                BinOp::Add => Ok(self.evaluate(left)? + self.evaluate(right)?),
                BinOp::Sub => Ok(self.evaluate(left)? - self.evaluate(right)?),
                BinOp::Mul => Ok(self.evaluate(left)? * self.evaluate(right)?),

                BinOp::Div => {
                    let lhs = self.evaluate(left)?;
                    let rhs = self.evaluate(right)?;
                    if rhs == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    Ok(lhs / rhs)
                }
            },
        }
    }
}
