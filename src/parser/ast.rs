//! AST (Abstract Syntax Tree) definitions for parsed formulas

use std::fmt;

/// Binary operators. `Assign` only ever appears at the root of a parsed
/// statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// The operator's source symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Assign => "=",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg, // -x
}

/// Classification of a leaf lexeme.
///
/// Identifiers are resolved against the symbol table at evaluation time,
/// never at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Integer,
    Float,
    Identifier,
}

/// Expression tree produced by the parser.
///
/// Each node exclusively owns its children (strict tree, no sharing). The
/// tree is handed to the evaluator as read-only input.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnOp,
        operand: Box<Expr>,
    },
    Literal {
        text: String,
        kind: LiteralKind,
    },
}

/// Infix rendering. Compound sub-expressions are fully parenthesized so that
/// re-parsing the output yields a structurally identical tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal { text, .. } => write!(f, "{}", text),
            Expr::Unary {
                op: UnOp::Neg,
                operand,
            } => write!(f, "-({})", operand),
            Expr::Binary {
                op: BinOp::Assign,
                left,
                right,
            } => write!(f, "{} = {}", left, right),
            Expr::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
        }
    }
}
