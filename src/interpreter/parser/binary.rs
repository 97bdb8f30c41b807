use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses the right operand of a binary operator.
    ///
    /// The current token is the operator. The right side is parsed at the
    /// operator's own precedence, which makes chains of equal strength fold
    /// to the left: `a + b + c` is `((a + b) + c)`.
    pub(super) fn parse_infix_expression(&mut self, left: Expr) -> ParseResult<Expr> {
        let kind = self.current.kind;
        let precedence = Precedence::of(kind);
        let Some(op) = token_to_binary_operator(kind) else {
            return Ok(left);
        };

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expr::Infix { left: Box::new(left),
                         op,
                         right: Box::new(right) })
    }

    /// Parses the argument list of a call; the callee is already parsed.
    pub(super) fn parse_call_expression(&mut self, function: Expr) -> ParseResult<Expr> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Ok(Expr::Call { function: Box::new(function),
                        arguments })
    }

    /// Parses `[<index>]` following an expression.
    pub(super) fn parse_index_expression(&mut self, left: Expr) -> ParseResult<Expr> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Ok(Expr::Index { left:  Box::new(left),
                         index: Box::new(index), })
    }
}

/// Converts a token kind to the binary operator it spells, if any.
///
/// # Example
/// ```
/// use monkey::{
///     ast::BinaryOperator,
///     interpreter::{parser::binary::token_to_binary_operator, token::TokenKind},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::NotEq), Some(BinaryOperator::NotEqual));
/// assert_eq!(token_to_binary_operator(TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Lt => Some(BinaryOperator::Less),
        TokenKind::Gt => Some(BinaryOperator::Greater),
        TokenKind::Eq => Some(BinaryOperator::Equal),
        TokenKind::NotEq => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
