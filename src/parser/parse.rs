//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the [`ParseError`] type, and
//! the top-level statement rule. The expression grammar rules live in
//! `expressions` as a separate `impl Parser` block.
//!
//! # Parser Architecture
//!
//! Hand-written recursive descent over a [`TokenStream`]. A failed parse
//! aborts the whole statement; no partial tree is ever returned.

use std::fmt;

use crate::parser::ast::{BinOp, Expr, LiteralKind};
use crate::parser::lexer::{LexError, Lexer, Token};
use crate::parser::stream::TokenStream;

/// Parser error type
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The token stream ran out in the middle of a grammar rule.
    UnexpectedEndOfInput {
        rule: &'static str,
        column: usize,
    },

    /// The current token is not one the active rule accepts.
    ExpectedToken {
        wanted: &'static str,
        got: String,
        column: usize,
    },

    /// A lexer error surfacing through parsing.
    Lex(LexError),
}

impl ParseError {
    /// Source column the error points at.
    pub fn column(&self) -> usize {
        match self {
            ParseError::UnexpectedEndOfInput { column, .. }
            | ParseError::ExpectedToken { column, .. } => *column,
            ParseError::Lex(err) => err.column,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEndOfInput { rule, column } => {
                write!(
                    f,
                    "Parse error at column {}: unexpected end of input in {}",
                    column, rule
                )
            }
            ParseError::ExpectedToken {
                wanted,
                got,
                column,
            } => {
                write!(
                    f,
                    "Parse error at column {}: expected {}, found {}",
                    column, wanted, got
                )
            }
            ParseError::Lex(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

/// Recursive descent parser for single-line formulas
pub struct Parser {
    pub(crate) stream: TokenStream,
}

impl Parser {
    /// Tokenize `source` eagerly and wrap the result in a stream.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            stream: TokenStream::new(tokens),
        })
    }

    /// Parse the whole statement: `IDENT "=" expression` followed by end of
    /// input. The returned root is always an assignment node whose left side
    /// is an identifier literal.
    pub fn parse_statement(&mut self) -> Result<Expr, ParseError> {
        let name = match self.stream.advance().clone() {
            Token::Eof(col) => {
                return Err(ParseError::UnexpectedEndOfInput {
                    rule: "statement",
                    column: col,
                });
            }
            Token::Ident(name, _) => name,
            other => {
                return Err(ParseError::ExpectedToken {
                    wanted: "an identifier",
                    got: other.to_string(),
                    column: other.column(),
                });
            }
        };

        match self.stream.advance().clone() {
            Token::Eof(col) => {
                return Err(ParseError::UnexpectedEndOfInput {
                    rule: "statement",
                    column: col,
                });
            }
            Token::Eq(_) => {}
            other => {
                return Err(ParseError::ExpectedToken {
                    wanted: "'='",
                    got: other.to_string(),
                    column: other.column(),
                });
            }
        }

        let rhs = self.parse_expression()?;

        // A complete expression must consume the rest of the line.
        match self.stream.advance().clone() {
            Token::Eof(_) => {}
            other => {
                return Err(ParseError::ExpectedToken {
                    wanted: "end of input",
                    got: other.to_string(),
                    column: other.column(),
                });
            }
        }

        Ok(Expr::Binary {
            op: BinOp::Assign,
            left: Box::new(Expr::Literal {
                text: name,
                kind: LiteralKind::Identifier,
            }),
            right: Box::new(rhs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::UnOp;

    fn parse(source: &str) -> Result<Expr, ParseError> {
        Parser::new(source)?.parse_statement()
    }

    fn literal(text: &str, kind: LiteralKind) -> Expr {
        Expr::Literal {
            text: text.to_string(),
            kind,
        }
    }

    fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[test]
    fn test_root_is_assignment() {
        let tree = parse("A=1").unwrap();

        match tree {
            Expr::Binary {
                op: BinOp::Assign,
                left,
                right,
            } => {
                assert_eq!(*left, literal("A", LiteralKind::Identifier));
                assert_eq!(*right, literal("1", LiteralKind::Integer));
            }
            _ => panic!("Expected assignment root"),
        }
    }

    #[test]
    fn test_precedence_shape() {
        // 3*4 nests as a term beneath the +
        let tree = parse("A=2+3*4").unwrap();

        let expected = binary(
            BinOp::Assign,
            literal("A", LiteralKind::Identifier),
            binary(
                BinOp::Add,
                literal("2", LiteralKind::Integer),
                binary(
                    BinOp::Mul,
                    literal("3", LiteralKind::Integer),
                    literal("4", LiteralKind::Integer),
                ),
            ),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_right_associative_subtraction() {
        // The right-recursive grammar groups 10-3-2 as 10-(3-2).
        let tree = parse("A=10-3-2").unwrap();

        let expected = binary(
            BinOp::Assign,
            literal("A", LiteralKind::Identifier),
            binary(
                BinOp::Sub,
                literal("10", LiteralKind::Integer),
                binary(
                    BinOp::Sub,
                    literal("3", LiteralKind::Integer),
                    literal("2", LiteralKind::Integer),
                ),
            ),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_parenthesized_division() {
        let tree = parse("A=(8/10)+9").unwrap();

        let expected = binary(
            BinOp::Assign,
            literal("A", LiteralKind::Identifier),
            binary(
                BinOp::Add,
                binary(
                    BinOp::Div,
                    literal("8", LiteralKind::Integer),
                    literal("10", LiteralKind::Integer),
                ),
                literal("9", LiteralKind::Integer),
            ),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_stacked_negation() {
        let tree = parse("A=--5").unwrap();

        let expected = binary(
            BinOp::Assign,
            literal("A", LiteralKind::Identifier),
            Expr::Unary {
                op: UnOp::Neg,
                operand: Box::new(Expr::Unary {
                    op: UnOp::Neg,
                    operand: Box::new(literal("5", LiteralKind::Integer)),
                }),
            },
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_float_and_identifier_leaves() {
        let tree = parse("y = x + 2.5").unwrap();

        let expected = binary(
            BinOp::Assign,
            literal("y", LiteralKind::Identifier),
            binary(
                BinOp::Add,
                literal("x", LiteralKind::Identifier),
                literal("2.5", LiteralKind::Float),
            ),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_missing_operand_is_end_of_input() {
        let err = parse("A=5+").unwrap_err();

        assert!(matches!(
            err,
            ParseError::UnexpectedEndOfInput { rule: "factor", .. }
        ));
    }

    #[test]
    fn test_missing_equals() {
        let err = parse("A 5").unwrap_err();

        match err {
            ParseError::ExpectedToken {
                wanted, column, ..
            } => {
                assert_eq!(wanted, "'='");
                assert_eq!(column, 3);
            }
            _ => panic!("Expected token mismatch"),
        }
    }

    #[test]
    fn test_trailing_token() {
        let err = parse("A=1 2").unwrap_err();

        match err {
            ParseError::ExpectedToken {
                wanted, column, ..
            } => {
                assert_eq!(wanted, "end of input");
                assert_eq!(column, 5);
            }
            _ => panic!("Expected trailing-token error"),
        }
    }

    #[test]
    fn test_unclosed_paren() {
        let err = parse("A=(1+2").unwrap_err();

        match err {
            ParseError::ExpectedToken { wanted, .. } => assert_eq!(wanted, "')'"),
            _ => panic!("Expected ')' mismatch"),
        }
    }

    #[test]
    fn test_empty_input() {
        let err = parse("").unwrap_err();

        assert!(matches!(
            err,
            ParseError::UnexpectedEndOfInput {
                rule: "statement",
                column: 1
            }
        ));
    }

    #[test]
    fn test_lex_error_surfaces() {
        let err = parse("A=$1").unwrap_err();

        match err {
            ParseError::Lex(lex) => {
                assert_eq!(lex.character, '$');
                assert_eq!(lex.column, 3);
            }
            _ => panic!("Expected lex error"),
        }
        assert_eq!(parse("A=$1").unwrap_err().column(), 3);
    }

    #[test]
    fn test_round_trip() {
        for source in [
            "A=2+3*4",
            "A=10-3-2",
            "A=(8/10)+9",
            "A=--5",
            "B=(8/10)+A+9",
            "y = x + 2.5",
            "z=-(1+2)*3",
        ] {
            let tree = parse(source).unwrap();
            let reparsed = parse(&tree.to_string()).unwrap();
            assert_eq!(tree, reparsed, "round trip failed for {}", source);
        }
    }
}
