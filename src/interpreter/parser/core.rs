use tracing::trace;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Handler for a token that starts an expression.
pub(super) type PrefixParseFn<'source> = fn(&mut Parser<'source>) -> ParseResult<Expr>;

/// Handler for a token that continues the expression on its left.
pub(super) type InfixParseFn<'source> = fn(&mut Parser<'source>, Expr) -> ParseResult<Expr>;

/// Binding strength of an operator, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// `-x` and `!x`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

impl Precedence {
    /// Precedence a token has when it appears in infix position.
    ///
    /// Tokens that cannot continue an expression are `Lowest`, which stops
    /// the Pratt loop.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            TokenKind::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// A Pratt parser over a token stream.
///
/// The parser looks at two tokens at a time, `current` and `peek`. A failed
/// statement does not stop parsing: its diagnostic is recorded and the parser
/// resumes with the next token, so one pass reports every error it can find.
/// Callers must check [`Parser::errors`] before trusting the returned tree.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let mut parser = Parser::new(Lexer::new("let x = 5; x * 2"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "let x = 5;\n(x * 2);");
/// ```
pub struct Parser<'source> {
    lexer:             Lexer<'source>,
    pub(super) current: Token,
    pub(super) peek:    Token,
    errors:            Vec<ParseError>,
}

impl<'source> Parser<'source> {
    /// Creates a parser and fills the two-token window.
    #[must_use]
    pub fn new(mut lexer: Lexer<'source>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Self { lexer,
               current,
               peek,
               errors: Vec::new() }
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are left out of the program and their
    /// diagnostics are appended to [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current.kind != TokenKind::Eof {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(error) => self.record(error),
            }
            self.next_token();
        }

        program
    }

    /// Diagnostics recorded so far, in source order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    pub(super) fn record(&mut self, error: ParseError) {
        trace!(%error, "parse error recorded");
        self.errors.push(error);
    }

    /// Shifts the window one token forward.
    pub(super) fn next_token(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances only if the next token has the required kind.
    ///
    /// # Errors
    /// `UnexpectedToken` when the next token is of any other kind; the window
    /// is left unchanged.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected: kind,
                                              found:    self.peek.kind, })
        }
    }

    /// Parses an expression whose operators bind tighter than `precedence`.
    ///
    /// The current token selects a prefix handler that produces the left
    /// operand. While the next token is an infix operator that binds tighter
    /// than `precedence`, the parser advances onto it and folds the left
    /// operand into a larger expression. Operators of equal strength
    /// therefore associate to the left.
    ///
    /// # Errors
    /// - `NoPrefixParseFn` if no expression can start with the current token.
    /// - Any error raised by a prefix or infix handler.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expr> {
        let prefix = Self::prefix_parse_fn(self.current.kind)
            .ok_or(ParseError::NoPrefixParseFn { kind: self.current.kind })?;
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind) {
            let Some(infix) = Self::infix_parse_fn(self.peek.kind) else {
                return Ok(left);
            };

            self.next_token();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    /// Returns the handler for a token in prefix position.
    fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn<'source>> {
        let parse_fn: PrefixParseFn<'source> = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::String => Self::parse_string_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::Function => Self::parse_function_literal,
            TokenKind::LBracket => Self::parse_array_literal,
            TokenKind::LBrace => Self::parse_hash_literal,
            _ => return None,
        };
        Some(parse_fn)
    }

    /// Returns the handler for a token in infix position.
    fn infix_parse_fn(kind: TokenKind) -> Option<InfixParseFn<'source>> {
        let parse_fn: InfixParseFn<'source> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt => Self::parse_infix_expression,
            TokenKind::LParen => Self::parse_call_expression,
            TokenKind::LBracket => Self::parse_index_expression,
            _ => return None,
        };
        Some(parse_fn)
    }
}
