//! Lexer (tokenizer) for formula source text
//!
//! Converts a single-line formula into a flat [`Token`] sequence consumed by
//! the parser. Whitespace separates tokens and is never emitted as one; there
//! are no comments, string literals, or escape sequences in the language.

use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries the 1-based source column of its first character so
/// that parse errors can point back into the original line.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals (kept as lexeme text; numeric parsing happens at evaluation)
    IntLiteral(String, usize),
    FloatLiteral(String, usize),

    // Identifiers
    Ident(String, usize),

    // Operators and punctuation
    Eq(usize),     // =
    Plus(usize),   // +
    Minus(usize),  // -
    Star(usize),   // *
    Slash(usize),  // /
    LParen(usize), // (
    RParen(usize), // )

    /// End of input. Its column is the one immediately after the last
    /// consumed character.
    Eof(usize),

    /// Rest position of a [`TokenStream`](super::stream::TokenStream) before
    /// the first advance. Never produced by the lexer.
    Start,
}

impl Token {
    /// Returns the 1-based source column where this token appears.
    pub fn column(&self) -> usize {
        match self {
            Token::IntLiteral(_, col)
            | Token::FloatLiteral(_, col)
            | Token::Ident(_, col)
            | Token::Eq(col)
            | Token::Plus(col)
            | Token::Minus(col)
            | Token::Star(col)
            | Token::Slash(col)
            | Token::LParen(col)
            | Token::RParen(col)
            | Token::Eof(col) => *col,
            Token::Start => 0,
        }
    }

    /// Returns the literal lexeme matched for this token.
    pub fn text(&self) -> &str {
        match self {
            Token::IntLiteral(s, _) | Token::FloatLiteral(s, _) | Token::Ident(s, _) => s,
            Token::Eq(_) => "=",
            Token::Plus(_) => "+",
            Token::Minus(_) => "-",
            Token::Star(_) => "*",
            Token::Slash(_) => "/",
            Token::LParen(_) => "(",
            Token::RParen(_) => ")",
            Token::Eof(_) | Token::Start => "",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntLiteral(s, _) => write!(f, "int literal {}", s),
            Token::FloatLiteral(s, _) => write!(f, "float literal {}", s),
            Token::Ident(s, _) => write!(f, "identifier '{}'", s),
            Token::Eq(_) => write!(f, "'='"),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::Eof(_) => write!(f, "end of input"),
            Token::Start => write!(f, "start of input"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub character: char,
    pub column: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lex error at column {}: unrecognized character '{}'",
            self.column, self.character
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for single-line formula source
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source line.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            column: 1,
        }
    }

    /// Tokenize the entire input, terminating the sequence with [`Token::Eof`].
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            let col = self.column;
            let ch = match self.advance() {
                Some(ch) => ch,
                None => {
                    tokens.push(Token::Eof(col));
                    break;
                }
            };

            tokens.push(self.next_token(ch, col)?);
        }

        Ok(tokens)
    }

    /// Classify the token starting with `ch` at column `col`.
    fn next_token(&mut self, ch: char, col: usize) -> Result<Token, LexError> {
        match ch {
            '0'..='9' => Ok(self.number_literal(ch, col)),
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier(ch, col)),
            '=' => Ok(Token::Eq(col)),
            '+' => Ok(Token::Plus(col)),
            '-' => Ok(Token::Minus(col)),
            '*' => Ok(Token::Star(col)),
            '/' => Ok(Token::Slash(col)),
            '(' => Ok(Token::LParen(col)),
            ')' => Ok(Token::RParen(col)),
            _ => Err(LexError {
                character: ch,
                column: col,
            }),
        }
    }

    /// Parse numeric literal. A decimal point makes it a float; a trailing
    /// bare point (`5.`) still lexes as a float literal.
    fn number_literal(&mut self, first_digit: char, col: usize) -> Token {
        let mut text = String::new();
        text.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if self.peek() == Some('.') {
            text.push('.');
            self.advance();

            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    text.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }

            return Token::FloatLiteral(text, col);
        }

        Token::IntLiteral(text, col)
    }

    /// Parse identifier: `[A-Za-z_][A-Za-z0-9_]*`
    fn identifier(&mut self, first_char: char, col: usize) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::Ident(ident, col)
    }

    /// Skip whitespace separators
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied()?;
        self.position += 1;
        self.column += 1;
        Some(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("B=(8/10)+A+9");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Ident(ref s, 1) if s == "B"));
        assert!(matches!(tokens[1], Token::Eq(2)));
        assert!(matches!(tokens[2], Token::LParen(3)));
        assert!(matches!(tokens[3], Token::IntLiteral(ref s, 4) if s == "8"));
        assert!(matches!(tokens[4], Token::Slash(5)));
        assert!(matches!(tokens[5], Token::IntLiteral(ref s, 6) if s == "10"));
        assert!(matches!(tokens[6], Token::RParen(8)));
        assert!(matches!(tokens[7], Token::Plus(9)));
        assert!(matches!(tokens[8], Token::Ident(ref s, 10) if s == "A"));
        assert!(matches!(tokens[9], Token::Plus(11)));
        assert!(matches!(tokens[10], Token::IntLiteral(ref s, 12) if s == "9"));
        assert!(matches!(tokens[11], Token::Eof(13)));
        assert_eq!(tokens.len(), 12);
    }

    #[test]
    fn test_whitespace_separates() {
        let mut lexer = Lexer::new("x = 2.5");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Ident(ref s, 1) if s == "x"));
        assert!(matches!(tokens[1], Token::Eq(3)));
        assert!(matches!(tokens[2], Token::FloatLiteral(ref s, 5) if s == "2.5"));
        assert!(matches!(tokens[3], Token::Eof(8)));
    }

    #[test]
    fn test_float_with_trailing_point() {
        let mut lexer = Lexer::new("y=5.");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[2], Token::FloatLiteral(ref s, 3) if s == "5."));
    }

    #[test]
    fn test_underscore_identifier() {
        let mut lexer = Lexer::new("_tmp2=1");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Ident(ref s, 1) if s == "_tmp2"));
    }

    #[test]
    fn test_unrecognized_character() {
        let mut lexer = Lexer::new("A=5@3");
        let err = lexer.tokenize().unwrap_err();

        assert_eq!(err.character, '@');
        assert_eq!(err.column, 4);
    }

    #[test]
    fn test_empty_input_is_just_eof() {
        let mut lexer = Lexer::new("");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Eof(1)));
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_eof_column_after_last_character() {
        let mut lexer = Lexer::new("A=1");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens.last(), Some(Token::Eof(4))));
    }
}
