use std::iter::FusedIterator;
use std::str::Chars;

use arithspan::Span;
use thiserror::Error;

use crate::token::{Token, TokenKind};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("unrecognized character '{character}'")]
    UnrecognizedCharacter { character: char, position: u32 },
}

impl ScanError {
    #[must_use]
    pub const fn position(&self) -> u32 {
        match self {
            Self::UnrecognizedCharacter { position, .. } => *position,
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnrecognizedCharacter {
                character,
                position,
            } => Span::new(*position, *position + character.len_utf8() as u32),
        }
    }
}

pub type ScanResult<T> = Result<T, ScanError>;

/// ASCII whitespace including vertical tab, which
/// [`char::is_ascii_whitespace`] leaves out.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    chars: Chars<'a>,

    /// start byte position of current token
    byte_start: u32,

    /// byte position of cursor
    byte: u32,

    /// the iterator already yielded the end of input token
    done: bool,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        assert!(u32::try_from(input.len()).is_ok());

        Self {
            input,
            chars: input.chars(),
            byte_start: 0,
            byte: 0,
            done: false,
        }
    }

    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.input
    }

    /// Byte offset of the cursor. Never decreases.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.byte
    }

    /// Whether only whitespace remains after the cursor.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.chars.as_str().chars().all(is_whitespace)
    }

    /// Scans until end of input without stopping at errors. On success the
    /// tokens end with [`TokenKind::EndOfInput`].
    pub fn scan_all(self) -> Result<Vec<Token<'a>>, Vec<ScanError>> {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        for item in self {
            match item {
                Ok(ok) => tokens.push(ok),
                Err(err) => errors.push(err),
            }
        }

        if errors.is_empty() {
            Ok(tokens)
        } else {
            Err(errors)
        }
    }

    fn first(&self) -> Option<char> {
        self.chars.clone().next()
    }

    fn bump(&mut self) -> Option<char> {
        #[allow(clippy::cast_possible_truncation)]
        self.chars
            .next()
            .inspect(|c| self.byte += c.len_utf8() as u32)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.first().is_some_and(&pred) {
            self.bump();
        }
    }

    const fn make_span(&self) -> Span {
        Span::new(self.byte_start, self.byte)
    }

    fn view(&self) -> &'a str {
        &self.input[self.byte_start as usize..self.byte as usize]
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    fn number(&mut self) -> Token<'a> {
        self.eat_while(|c| c.is_ascii_digit());
        Token::new(TokenKind::Number, self.view(), self.make_span())
    }

    /// Scans the next token. Once the input is exhausted every call returns
    /// the end of input token without moving the cursor.
    pub fn next_token(&mut self) -> ScanResult<Token<'a>> {
        self.skip_whitespace();

        self.byte_start = self.byte;
        let Some(c) = self.bump() else {
            return Ok(Token::new(TokenKind::EndOfInput, "", self.make_span()));
        };

        let token = if let Some(kind) = TokenKind::from_symbol(c) {
            Token::new(kind, self.view(), self.make_span())
        } else if c.is_ascii_digit() {
            self.number()
        } else {
            let err = ScanError::UnrecognizedCharacter {
                character: c,
                position:  self.byte_start,
            };
            tracing::debug!(character = ?c, position = self.byte_start, "unrecognized character");
            return Err(err);
        };

        tracing::trace!(kind = %token.kind(), text = token.text(), lo = self.byte_start, "token");
        Ok(token)
    }
}

/// Fused: yields [`TokenKind::EndOfInput`] once, then `None`. Use
/// [`Scanner::next_token`] to keep polling the terminal token.
impl<'a> Iterator for Scanner<'a> {
    type Item = ScanResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.next_token();
        if matches!(&item, Ok(token) if token.kind().is_end_of_input()) {
            self.done = true;
        }
        Some(item)
    }
}

impl FusedIterator for Scanner<'_> {}
