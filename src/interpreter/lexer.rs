use logos::Logos;

use crate::interpreter::token::{Token, TokenKind, lookup_ident};

/// A pull-based lexer over a source string.
///
/// Each call to [`Lexer::next_token`] yields exactly one token. Once the
/// input is exhausted every further call yields an `EOF` token.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("let five = 5;");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "five");
/// ```
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, TokenKind>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: TokenKind::lexer(source) }
    }

    /// Scans and returns the next token.
    ///
    /// Unrecognized characters become `ILLEGAL` tokens carrying the offending
    /// text; scanning continues after them.
    pub fn next_token(&mut self) -> Token {
        let Some(scanned) = self.inner.next() else {
            return Token::eof();
        };
        let slice = self.inner.slice();

        match scanned {
            Ok(TokenKind::Ident) => Token::new(lookup_ident(slice), slice),
            Ok(TokenKind::String) => Token::new(TokenKind::String, string_body(slice)),
            Ok(kind) => Token::new(kind, slice),
            Err(()) => Token::new(TokenKind::Illegal, slice),
        }
    }

    /// Drains the lexer into a vector of tokens, ending with a single `EOF`.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }
}

/// Strips the opening quote and, when present, the closing quote.
fn string_body(slice: &str) -> &str {
    let body = slice.strip_prefix('"').unwrap_or(slice);
    body.strip_suffix('"').unwrap_or(body)
}
