use std::fmt::Display;

use arithspan::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,

    Plus,
    Minus,
    Multiply,
    Divide,

    LeftParen,
    RightParen,

    EndOfInput,
}

impl TokenKind {
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '(' => Some(Self::LeftParen),
            ')' => Some(Self::RightParen),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Multiply => Some('*'),
            Self::Divide => Some('/'),
            Self::LeftParen => Some('('),
            Self::RightParen => Some(')'),
            Self::Number | Self::EndOfInput => None,
        }
    }

    #[must_use]
    pub const fn is_end_of_input(self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "Number"),
            Self::Plus => write!(f, "Plus"),
            Self::Minus => write!(f, "Minus"),
            Self::Multiply => write!(f, "Multiply"),
            Self::Divide => write!(f, "Divide"),
            Self::LeftParen => write!(f, "LeftParen"),
            Self::RightParen => write!(f, "RightParen"),
            Self::EndOfInput => write!(f, "EndOfInput"),
        }
    }
}

/// A classified slice of the scanned input.
///
/// `text` borrows from the source; it is empty only for
/// [`TokenKind::EndOfInput`], whose span is the empty span at the end of the
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
    span: Span,
}

impl<'a> Token<'a> {
    #[must_use]
    #[inline]
    pub const fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    #[must_use]
    #[inline]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    #[inline]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    #[must_use]
    #[inline]
    pub const fn span(&self) -> Span {
        self.span
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_end_of_input() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}({:?})", self.kind, self.text)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const KINDS: [TokenKind; 8] = [
        TokenKind::Number,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::EndOfInput,
    ];

    #[test]
    fn symbols() {
        for kind in KINDS {
            if let Some(c) = kind.symbol() {
                assert_eq!(TokenKind::from_symbol(c), Some(kind));
            }
        }
        assert_eq!(TokenKind::Number.symbol(), None);
        assert_eq!(TokenKind::EndOfInput.symbol(), None);
        assert_eq!(TokenKind::from_symbol('7'), None);
        assert_eq!(TokenKind::from_symbol('&'), None);
    }

    #[test]
    fn display() {
        let number = Token::new(TokenKind::Number, "42", Span::new(0, 2));
        let plus = Token::new(TokenKind::Plus, "+", Span::new(3, 4));
        let eof = Token::new(TokenKind::EndOfInput, "", Span::point(4));

        assert_eq!(number.to_string(), r#"Number("42")"#);
        assert_eq!(plus.to_string(), r#"Plus("+")"#);
        assert_eq!(eof.to_string(), "EndOfInput");
    }
}
