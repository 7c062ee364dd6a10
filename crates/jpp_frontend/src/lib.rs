#[macro_use]
extern crate macro_rules_attribute;

mod lexer;
mod parser;

pub mod token;

use jpp_ir::ast::Program;
pub use lexer::{Lexer, TokenIter};
pub use parser::{ParseError, ParseResult, Parser};

derive_alias! {
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)];
}

pub fn lex(source: &str) -> TokenIter<'_> {
    Lexer::new(source).lex()
}

pub fn parse(tokens: TokenIter) -> ParseResult<Program> {
    Parser::new(tokens).parse()
}

/// Tokenize and parse a whole source file.
pub fn parse_source(source: &str) -> ParseResult<Program> {
    parse(lex(source))
}
