use jpp_ir::Type;

use crate::NodeCopy;

#[derive(NodeCopy!)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub line: usize,
}

impl Token<'_> {
    /// How this token is named in diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier => format!("identifier `{}`", self.lexeme),
            TokenKind::Integer => format!("integer `{}`", self.lexeme),
            TokenKind::Unknown => format!("unrecognized character `{}`", self.lexeme),
            kind => kind.token_name().to_owned(),
        }
    }
}

impl PartialEq<TokenKind> for Token<'_> {
    fn eq(&self, kind: &TokenKind) -> bool {
        self.kind == *kind
    }
}

#[derive(NodeCopy!)]
pub enum TokenKind {
    Keyword(Keyword),
    Type(Type),
    Identifier,
    Integer,

    LBrace,
    RBrace,
    LParen,
    RParen,

    Comma,
    Semicolon,
    Arrow,

    Eof,
    Unknown,
}

#[derive(NodeCopy!)]
pub enum Keyword {
    Return,
}

impl TokenKind {
    pub fn token_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(kw) => match kw {
                Keyword::Return => "keyword `return`",
            },
            TokenKind::Type(_) => "a type name",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Arrow => "`->`",
            TokenKind::Eof => "end of input",
            TokenKind::Unknown => "unrecognized character",
        }
    }
}
