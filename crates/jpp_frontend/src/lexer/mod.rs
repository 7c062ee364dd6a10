
use std::str::Chars;

use jpp_ir::Type;
use jpp_utils::peek::Peek;

use crate::token::*;

/// Produces tokens from a source string.
///
/// Lexing never fails: characters that don't start any token come out as
/// [`TokenKind::Unknown`] and are rejected by the parser.
pub struct Lexer<'src> {
    all: &'src str,
    chars: Chars<'src>,

    token_start: usize,
    line: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            all: source,
            chars: source.chars(),

            token_start: 0,
            line: 1,
        }
    }

    /// Tokenize the rest of the source. The stream ends in exactly one
    /// [`TokenKind::Eof`] token.
    pub fn lex(mut self) -> TokenIter<'src> {
        let mut tokens = vec![];

        loop {
            let token = self.next_token();
            tokens.push(token);

            if token.kind == TokenKind::Eof {
                break;
            }
        }

        TokenIter::new(tokens)
    }

    pub fn next_token(&mut self) -> Token<'src> {
        loop {
            self.token_start = self.byte_pos();
            let line = self.line;

            let Some(ch) = self.chars.next() else {
                return self.token(TokenKind::Eof, line);
            };

            let kind = match ch {
                '\n' => {
                    self.line += 1;
                    continue;
                }
                ' ' | '\t' | '\r' => continue,

                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,

                ',' => TokenKind::Comma,
                ';' => TokenKind::Semicolon,
                '-' if self.chars.eat('>') => TokenKind::Arrow,

                '0'..='9' => {
                    self.chars.eat_while(char::is_ascii_digit);
                    TokenKind::Integer
                }

                ch if ch.is_ascii_alphabetic() => self.lex_alpha(),

                _ => TokenKind::Unknown,
            };

            let token = self.token(kind, line);
            log::trace!(
                "line {}: {:?} `{}`",
                token.line,
                token.kind,
                token.lexeme
            );

            return token;
        }
    }

    fn lex_alpha(&mut self) -> TokenKind {
        self.chars.eat_while(char::is_ascii_alphanumeric);

        let s = &self.all[self.token_start..self.byte_pos()];

        match s {
            "return" => TokenKind::Keyword(Keyword::Return),
            _ => match Type::from_name(s) {
                Some(ty) => TokenKind::Type(ty),
                None => TokenKind::Identifier,
            },
        }
    }

    fn token(&self, kind: TokenKind, line: usize) -> Token<'src> {
        Token {
            kind,
            lexeme: &self.all[self.token_start..self.byte_pos()],
            line,
        }
    }

    fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }
}

/// A fully lexed token stream.
///
/// Once the tokens run out, the end of input token is handed out again, so
/// the parser never needs to special-case running off the end.
pub struct TokenIter<'src> {
    tokens: std::vec::IntoIter<Token<'src>>,
    eof: Token<'src>,
}

impl<'src> TokenIter<'src> {
    fn new(tokens: Vec<Token<'src>>) -> Self {
        let eof = tokens
            .last()
            .copied()
            .filter(|t| t.kind == TokenKind::Eof)
            .unwrap_or(Token {
                kind: TokenKind::Eof,
                lexeme: "",
                line: 1,
            });

        Self {
            tokens: tokens.into_iter(),
            eof,
        }
    }

    pub fn eof(&self) -> Token<'src> {
        self.eof
    }

    /// The next token, without consuming it.
    pub fn peek_token(&self) -> Token<'src> {
        self.peek().unwrap_or(self.eof)
    }

    /// Consume and return the next token.
    pub fn bump(&mut self) -> Token<'src> {
        self.next().unwrap_or(self.eof)
    }
}

impl<'src> Iterator for TokenIter<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

impl Peek for TokenIter<'_> {
    fn peek(&self) -> Option<Self::Item> {
        self.tokens.as_slice().first().copied()
    }
}
