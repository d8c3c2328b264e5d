pub mod scanner;
pub mod token;

#[cfg(test)]
mod property_tests;

pub use crate::scanner::{ScanError, ScanResult, Scanner, is_whitespace};
pub use crate::token::{Token, TokenKind};
