use crate::{
    ast::BlockStatement,
    interpreter::{parser::core::Parser, token::TokenKind},
};

impl Parser<'_> {
    /// Parses the statements of a block; the current token is its `{`.
    ///
    /// Parsing stops on the closing `}`, which becomes the current token, or
    /// at end of input. A statement that fails to parse is recorded and
    /// skipped, so the rest of the block is still checked.
    pub(super) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut block = BlockStatement::default();
        self.next_token();

        while self.current.kind != TokenKind::RBrace && self.current.kind != TokenKind::Eof {
            match self.parse_statement() {
                Ok(statement) => block.statements.push(statement),
                Err(error) => self.record(error),
            }
            self.next_token();
        }

        block
    }
}
