use std::ops::Range;

/// Half-open byte range `lo..hi` into a source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    lo: u32,
    hi: u32,
}

impl Span {
    #[must_use]
    #[inline]
    pub const fn new(lo: u32, hi: u32) -> Self {
        if hi < lo {
            Self { lo: hi, hi: lo }
        } else {
            Self { lo, hi }
        }
    }

    /// Empty span located at `at`.
    #[must_use]
    #[inline]
    pub const fn point(at: u32) -> Self {
        Self { lo: at, hi: at }
    }

    #[must_use]
    #[inline]
    pub const fn len(self) -> u32 {
        self.hi - self.lo
    }

    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[must_use]
    #[inline]
    pub const fn lo(self) -> u32 {
        self.lo
    }

    #[must_use]
    #[inline]
    pub const fn hi(self) -> u32 {
        self.hi
    }

    /// Line and column of the start of this span, `None` if the span starts
    /// past the end of `src`.
    #[must_use]
    pub fn locate(self, src: &str) -> Option<Loc> {
        Loc::of(src, self.lo as usize)
    }
}

impl From<Span> for Range<usize> {
    fn from(value: Span) -> Self {
        value.lo as usize..value.hi as usize
    }
}

/// 1-based line and column, columns counted in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loc {
    pub line:   u32,
    pub column: u32,
}

impl Loc {
    #[must_use]
    pub fn of(src: &str, byte: usize) -> Option<Self> {
        if byte > src.len() {
            return None;
        }

        let mut loc = Self { line: 1, column: 1 };
        for (at, c) in src.char_indices() {
            if at >= byte {
                break;
            }
            if c == '\n' {
                loc.line += 1;
                loc.column = 1;
            } else {
                loc.column += 1;
            }
        }

        Some(loc)
    }
}
