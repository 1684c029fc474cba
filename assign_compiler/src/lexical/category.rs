//! Character classification for the tokenizer
//!
//! The alphabet is closed: ASCII letters, ASCII digits, the seven symbols
//! `+ - * / = ( )` and the space character. Anything else is invalid.

use crate::tokens::Token;
use std::fmt;

/// Classification bucket fed to the automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A letter
    Char,
    /// A digit
    Num,
    /// One of the literal symbols, categorized as itself
    Symbol(Token),
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Char => "char",
            Category::Num => "num",
            Category::Symbol(token) => token.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single input character is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Symbol(Token),
    Letter,
    Digit,
    Invalid,
}

impl CharClass {
    /// Automaton category for letters and digits; symbols and spaces have none
    /// because the tokenizer handles them before consulting the table
    pub fn category(&self) -> Option<Category> {
        match self {
            CharClass::Letter => Some(Category::Char),
            CharClass::Digit => Some(Category::Num),
            CharClass::Whitespace | CharClass::Symbol(_) | CharClass::Invalid => None,
        }
    }
}

/// Classify one input character
pub fn classify(c: char) -> CharClass {
    if c == ' ' {
        return CharClass::Whitespace;
    }
    if let Some(token) = Token::from_symbol(c) {
        return CharClass::Symbol(token);
    }
    if c.is_ascii_alphabetic() {
        CharClass::Letter
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else {
        CharClass::Invalid
    }
}

/// Whether the character belongs to the input alphabet
pub fn is_allowed(c: char) -> bool {
    classify(c) != CharClass::Invalid
}

/// First character outside the alphabet, with its character offset
pub fn find_invalid(text: &str) -> Option<(usize, char)> {
    text.chars().enumerate().find(|(_, c)| !is_allowed(*c))
}
