#[cfg(test)]
mod tests;

use jpp_ir::ast::*;
use jpp_ir::Type;
use jpp_utils::peek::Peek;

use crate::lexer::TokenIter;
use crate::token::{Keyword, Token, TokenKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected {expected}, found {found}")]
    Expected {
        expected: String,
        found: String,
        line: usize,
    },

    #[error("line {line}: unrecognized character `{lexeme}`")]
    Unrecognized { lexeme: String, line: usize },

    #[error("line {line}: integer literal `{lexeme}` is too large")]
    IntegerTooLarge { lexeme: String, line: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Expected { line, .. }
            | ParseError::Unrecognized { line, .. }
            | ParseError::IntegerTooLarge { line, .. } => *line,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive descent parser over a whole file's token stream.
///
/// Stops at the first error.
pub struct Parser<'src> {
    tokens: TokenIter<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(tokens: TokenIter<'src>) -> Self {
        Self { tokens }
    }

    pub fn parse(mut self) -> ParseResult<Program> {
        let mut functions = vec![];

        while self.tokens.peek_token().kind != TokenKind::Eof {
            functions.push(self.parse_function()?);
        }

        Ok(Program { functions })
    }

    fn parse_function(&mut self) -> ParseResult<FunctionDecl> {
        let (name, line) = self.parse_ident("a function name")?;

        self.expect(TokenKind::LParen)?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Arrow)?;

        let return_type = self.parse_type()?;

        self.expect(TokenKind::LBrace)?;

        let mut body = vec![];
        while !self.tokens.eat(TokenKind::RBrace) {
            body.push(self.parse_statement()?);
        }

        log::info!("parsed function `{name}` at line {line}");

        Ok(FunctionDecl {
            name,
            return_type,
            body,
            line,
        })
    }

    fn parse_type(&mut self) -> ParseResult<Type> {
        match self.tokens.bump() {
            Token {
                kind: TokenKind::Type(ty),
                ..
            } => Ok(ty),
            other => Err(error_expected("a return type", other)),
        }
    }

    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        match self.tokens.bump() {
            token if token.kind == TokenKind::Keyword(Keyword::Return) => {
                let value = self.parse_expr()?;
                self.expect(TokenKind::Semicolon)?;

                Ok(Stmt::Return(ReturnStatement {
                    value,
                    line: token.line,
                }))
            }

            other => Err(error_expected("a statement", other)),
        }
    }

    fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_literal().map(Expr::IntegerLiteral)
    }

    fn parse_literal(&mut self) -> ParseResult<IntegerLiteral> {
        match self.tokens.bump() {
            token if token.kind == TokenKind::Integer => {
                let value = token
                    .lexeme
                    .parse::<u64>()
                    .map_err(|_| ParseError::IntegerTooLarge {
                        lexeme: token.lexeme.to_owned(),
                        line: token.line,
                    })?;

                Ok(IntegerLiteral {
                    value,
                    line: token.line,
                })
            }

            other => Err(error_expected("an integer literal", other)),
        }
    }

    fn parse_ident(&mut self, expected: &str) -> ParseResult<(String, usize)> {
        match self.tokens.bump() {
            token if token.kind == TokenKind::Identifier => {
                Ok((token.lexeme.to_owned(), token.line))
            }
            other => Err(error_expected(expected, other)),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'src>> {
        match self.tokens.bump() {
            token if token.kind == kind => Ok(token),
            other => Err(error_expected(kind.token_name(), other)),
        }
    }
}

fn error_expected(expected: &str, found: Token) -> ParseError {
    log::trace!("expected {expected}, found {found:?}");

    match found.kind {
        TokenKind::Unknown => ParseError::Unrecognized {
            lexeme: found.lexeme.to_owned(),
            line: found.line,
        },
        _ => ParseError::Expected {
            expected: expected.to_owned(),
            found: found.describe(),
            line: found.line,
        },
    }
}
