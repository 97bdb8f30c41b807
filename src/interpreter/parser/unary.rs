use std::rc::Rc;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::TokenKind,
    },
};

impl Parser<'_> {
    pub(super) fn parse_identifier(&mut self) -> ParseResult<Expr> {
        Ok(Expr::Identifier(self.current.literal.clone()))
    }

    /// Parses a decimal integer literal.
    ///
    /// # Errors
    /// `InvalidInteger` if the literal does not fit in an `i64`.
    pub(super) fn parse_integer_literal(&mut self) -> ParseResult<Expr> {
        let literal = &self.current.literal;

        literal.parse::<i64>()
               .map(Expr::IntegerLiteral)
               .map_err(|_| ParseError::InvalidInteger { literal: literal.clone() })
    }

    pub(super) fn parse_string_literal(&mut self) -> ParseResult<Expr> {
        Ok(Expr::StringLiteral(self.current.literal.clone()))
    }

    pub(super) fn parse_boolean(&mut self) -> ParseResult<Expr> {
        Ok(Expr::Boolean(self.current.kind == TokenKind::True))
    }

    /// Parses `-<expr>` or `!<expr>`.
    ///
    /// The operand is parsed at prefix precedence, so `-a * b` is
    /// `((-a) * b)` while `-f(x)` negates the call.
    pub(super) fn parse_prefix_expression(&mut self) -> ParseResult<Expr> {
        let op = if self.current.kind == TokenKind::Bang {
            UnaryOperator::Not
        } else {
            UnaryOperator::Negate
        };

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::Prefix { op,
                          right: Box::new(right) })
    }

    /// Parses `( <expr> )`. Grouping leaves no node of its own in the tree.
    pub(super) fn parse_grouped_expression(&mut self) -> ParseResult<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(expr)
    }

    /// Parses an `if` expression with an optional `else` branch.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { <statements> } else { <statements> }
    /// ```
    ///
    /// # Errors
    /// `UnexpectedToken` if a parenthesis or brace is missing. Errors inside
    /// the branches are recorded by the block parser instead.
    pub(super) fn parse_if_expression(&mut self) -> ParseResult<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Ok(Expr::If { condition: Box::new(condition),
                      consequence,
                      alternative })
    }

    /// Parses `fn(<params>) { <statements> }`.
    pub(super) fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = Rc::new(self.parse_block_statement());

        Ok(Expr::FunctionLiteral { parameters, body })
    }

    /// Parses a comma separated list of parameter names up to and including
    /// the closing `)`.
    fn parse_function_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(self.current.literal.clone());

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(self.current.literal.clone());
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }

    pub(super) fn parse_array_literal(&mut self) -> ParseResult<Expr> {
        Ok(Expr::ArrayLiteral(self.parse_expression_list(TokenKind::RBracket)?))
    }

    /// Parses `{ <key>: <value>, ... }`.
    ///
    /// Keys are arbitrary expressions here; whether they are hashable is only
    /// known at run time.
    pub(super) fn parse_hash_literal(&mut self) -> ParseResult<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenKind::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;
        Ok(Expr::HashLiteral(pairs))
    }
}
