//! Expression grammar rules
//!
//! ```text
//! expression := term (("+" | "-") expression)?
//! term       := factor (("*" | "/") term)?
//! factor     := INT | FLOAT | "(" expression ")" | "-" factor | IDENT
//! ```
//!
//! Precedence is encoded structurally: `term` binds tighter than
//! `expression`, and `factor` is the leaf rule, so no precedence table is
//! needed. `expression` and `term` are right-recursive rather than looping,
//! which makes chained `+ - * /` group to the right (`10-3-2` parses as
//! `10-(3-2)`). That grouping is part of the language definition and is
//! pinned by the tests in `parse`.
//!
//! After a rule has parsed its left operand, it advances once to look for a
//! continuation operator. End of input ends the rule directly; any other
//! non-continuation token is handed back to the caller with a single
//! retreat.

use crate::parser::ast::{BinOp, Expr, LiteralKind, UnOp};
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// expression := term (("+" | "-") expression)?
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.parse_term()?;

        let op = match self.stream.advance().clone() {
            Token::Eof(_) => return Ok(lhs),
            Token::Plus(_) => BinOp::Add,
            Token::Minus(_) => BinOp::Sub,
            _ => {
                self.stream.retreat();
                return Ok(lhs);
            }
        };

        let rhs = self.parse_expression()?;
        Ok(Expr::Binary {
            op,
            left: Box::new(lhs),
            right: Box::new(rhs),
        })
    }

    /// term := factor (("*" | "/") term)?
    pub(crate) fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.parse_factor()?;

        let op = match self.stream.advance().clone() {
            Token::Eof(_) => return Ok(lhs),
            Token::Star(_) => BinOp::Mul,
            Token::Slash(_) => BinOp::Div,
            _ => {
                self.stream.retreat();
                return Ok(lhs);
            }
        };

        let rhs = self.parse_term()?;
        Ok(Expr::Binary {
            op,
            left: Box::new(lhs),
            right: Box::new(rhs),
        })
    }

    /// factor := INT | FLOAT | "(" expression ")" | "-" factor | IDENT
    pub(crate) fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        match self.stream.advance().clone() {
            Token::Eof(col) => Err(ParseError::UnexpectedEndOfInput {
                rule: "factor",
                column: col,
            }),

            Token::IntLiteral(text, _) => Ok(Expr::Literal {
                text,
                kind: LiteralKind::Integer,
            }),

            Token::FloatLiteral(text, _) => Ok(Expr::Literal {
                text,
                kind: LiteralKind::Float,
            }),

            Token::Ident(text, _) => Ok(Expr::Literal {
                text,
                kind: LiteralKind::Identifier,
            }),

            Token::LParen(_) => {
                let inner = self.parse_expression()?;
                match self.stream.advance().clone() {
                    Token::RParen(_) => Ok(inner),
                    other => Err(ParseError::ExpectedToken {
                        wanted: "')'",
                        got: other.to_string(),
                        column: other.column(),
                    }),
                }
            }

            Token::Minus(_) => {
                let operand = self.parse_factor()?;
                Ok(Expr::Unary {
                    op: UnOp::Neg,
                    operand: Box::new(operand),
                })
            }

            other => Err(ParseError::ExpectedToken {
                wanted: "a number, '(', '-', or an identifier",
                got: other.to_string(),
                column: other.column(),
            }),
        }
    }
}
