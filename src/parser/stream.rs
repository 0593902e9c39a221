//! Repositionable cursor over the lexed token sequence
//!
//! The parser consumes tokens through a [`TokenStream`], which supports the
//! two motions the grammar needs: advancing by one token and pushing the
//! last advance back ("retreat"). The grammar never needs more than one
//! level of pushback, so retreat is a bounded cursor decrement rather than
//! an undo stack.

use super::lexer::Token;

/// Cursor over an immutable token sequence.
///
/// The cursor rests on a synthetic [`Token::Start`] before the first
/// advance, so every grammar rule can follow the same advance-then-inspect
/// discipline. Advancing past the final [`Token::Eof`] clamps there.
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    /// Wrap a lexed token sequence. The sequence must already end with
    /// [`Token::Eof`].
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(matches!(tokens.last(), Some(Token::Eof(_))));

        let mut all = Vec::with_capacity(tokens.len() + 1);
        all.push(Token::Start);
        all.extend(tokens);

        Self {
            tokens: all,
            cursor: 0,
        }
    }

    /// Token under the cursor, without consuming it.
    pub fn current(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    /// Move the cursor forward one token and return the new current token.
    /// At the final [`Token::Eof`] this is a no-op that keeps returning it.
    pub fn advance(&mut self) -> &Token {
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
        &self.tokens[self.cursor]
    }

    /// Undo the last advance. Retreating from the rest position is a
    /// programming error, not a user-facing failure.
    pub fn retreat(&mut self) {
        debug_assert!(self.cursor > 0, "retreat before the first advance");
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Cursor index, for diagnostics.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Source column of the current token.
    pub fn column(&self) -> usize {
        self.current().column()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    fn stream_for(source: &str) -> TokenStream {
        let tokens = Lexer::new(source).tokenize().unwrap();
        TokenStream::new(tokens)
    }

    #[test]
    fn test_advance_and_current() {
        let mut stream = stream_for("A=1");

        assert!(matches!(stream.current(), Token::Start));
        assert!(matches!(stream.advance(), Token::Ident(ref s, 1) if s == "A"));
        assert!(matches!(stream.current(), Token::Ident(_, _)));
        assert!(matches!(stream.advance(), Token::Eq(2)));
        assert!(matches!(stream.advance(), Token::IntLiteral(_, 3)));
        assert!(matches!(stream.advance(), Token::Eof(4)));
    }

    #[test]
    fn test_advance_clamps_at_eof() {
        let mut stream = stream_for("A");

        stream.advance();
        assert!(matches!(stream.advance(), Token::Eof(_)));
        assert!(matches!(stream.advance(), Token::Eof(_)));
        assert!(matches!(stream.advance(), Token::Eof(_)));
    }

    #[test]
    fn test_retreat_undoes_advance() {
        let mut stream = stream_for("A=1");

        stream.advance();
        stream.advance();
        assert!(matches!(stream.current(), Token::Eq(_)));

        stream.retreat();
        assert!(matches!(stream.current(), Token::Ident(_, _)));
        assert!(matches!(stream.advance(), Token::Eq(_)));
    }

    #[test]
    fn test_position_and_column() {
        let mut stream = stream_for("A = 1");

        assert_eq!(stream.position(), 0);
        stream.advance();
        assert_eq!(stream.position(), 1);
        assert_eq!(stream.column(), 1);
        stream.advance();
        assert_eq!(stream.column(), 3);
    }
}
