//! Forward-only cursor over a token sequence
//!
//! The parser never backtracks, so the stream offers one token of lookahead
//! and a position that only moves forward.

use crate::tokens::token::Token;

/// Borrowing cursor over an immutable token sequence
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Current token without consuming it
    pub fn peek(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    /// Consume and return the current token
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Check if current token matches expected
    pub fn check_token(&self, expected: Token) -> bool {
        self.peek() == Some(expected)
    }

    /// Advance if current token matches expected
    pub fn advance_if_matches(&mut self, expected: Token) -> bool {
        if self.check_token(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consume the current token if it satisfies the predicate
    pub fn consume_if<F>(&mut self, predicate: F) -> Option<Token>
    where
        F: FnOnce(Token) -> bool,
    {
        match self.peek() {
            Some(token) if predicate(token) => {
                self.position += 1;
                Some(token)
            }
            _ => None,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining_count(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }
}
