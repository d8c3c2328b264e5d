//! Scanner invariants checked over generated inputs.

use proptest::prelude::*;

use crate::scanner::{Scanner, is_whitespace};
use crate::token::TokenKind;

/// Arbitrary printable text mixed with whitespace runs.
const ANY_INPUT: &str = "[\\PC\t\n\r\x0B\x0C]";

/// Expressions built only from characters the scanner accepts.
fn well_formed() -> impl Strategy<Value = String> {
    "[0-9+\\-*/() \t\n\r\x0B\x0C]{0,200}"
}

fn any_input(max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("{ANY_INPUT}{{0,{max}}}")).unwrap()
}

proptest! {
    #[test]
    fn never_panics(input in any_input(300)) {
        for item in Scanner::new(&input) {
            let _ = item;
        }
    }

    #[test]
    fn text_reconstructs_input(input in well_formed()) {
        let tokens = Scanner::new(&input).scan_all().unwrap();
        let joined: String = tokens.iter().map(|t| t.text()).collect();
        let expected: String = input.chars().filter(|&c| !is_whitespace(c)).collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn single_end_of_input_at_the_end(input in any_input(200)) {
        let items: Vec<_> = Scanner::new(&input).collect();
        let ends = items
            .iter()
            .filter(|item| matches!(item, Ok(t) if t.kind().is_end_of_input()))
            .count();
        prop_assert_eq!(ends, 1);
        prop_assert!(matches!(items.last(), Some(Ok(t)) if t.kind().is_end_of_input()));
    }

    #[test]
    fn end_of_input_is_idempotent(input in any_input(100), extra in 1usize..16) {
        let mut scanner = Scanner::new(&input);
        while !matches!(scanner.next_token(), Ok(t) if t.kind().is_end_of_input()) {}

        let end = scanner.position();
        for _ in 0..extra {
            let token = scanner.next_token();
            prop_assert!(matches!(token, Ok(t) if t.kind().is_end_of_input() && t.text().is_empty()));
            prop_assert_eq!(scanner.position(), end);
        }
    }

    #[test]
    fn numbers_are_ascii_digits(input in any_input(200)) {
        for token in Scanner::new(&input).flatten() {
            if token.kind() == TokenKind::Number {
                prop_assert!(!token.text().is_empty());
                prop_assert!(token.text().bytes().all(|b| b.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn cursor_never_decreases(input in any_input(200)) {
        let mut scanner = Scanner::new(&input);
        let len = u32::try_from(input.len()).unwrap();
        let mut last = scanner.position();
        loop {
            let item = scanner.next_token();
            let now = scanner.position();
            prop_assert!(now >= last);
            prop_assert!(now <= len);
            last = now;
            if matches!(item, Ok(t) if t.kind().is_end_of_input()) {
                break;
            }
        }
        prop_assert_eq!(last, len);
    }

    #[test]
    fn spans_match_text(input in any_input(200)) {
        let mut prev_hi = 0;
        for token in Scanner::new(&input).flatten() {
            let span = token.span();
            prop_assert!(span.lo() >= prev_hi);
            prop_assert_eq!(&input[std::ops::Range::<usize>::from(span)], token.text());
            prev_hi = span.hi();
        }
    }
}
