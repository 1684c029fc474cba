//! Recursive-descent parser for `id = expression`
//!
//! ```text
//! S -> id = E
//! E -> T ( (+|-) T )*
//! T -> F ( (*|/) F )*
//! F -> id | num | ( E )
//! ```
//!
//! One token of lookahead selects every production, so the parser never
//! backtracks and its cursor only moves forward.

use crate::config::constants::compile_time::syntax::MAX_PARSE_DEPTH;
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::{Token, TokenStream};
use crate::log_debug;

/// Grammar checker over a borrowed token sequence
pub struct Parser<'a> {
    tokens: TokenStream<'a>,
    depth: usize,
    max_depth_seen: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens: TokenStream::new(tokens),
            depth: 0,
            max_depth_seen: 0,
        }
    }

    /// Tokens consumed so far
    pub fn position(&self) -> usize {
        self.tokens.position()
    }

    /// Deepest parenthesis nesting reached
    pub fn max_depth(&self) -> usize {
        self.max_depth_seen
    }

    /// `S -> id = E`, then the input must be exhausted
    pub fn parse_statement(&mut self) -> SyntaxResult<()> {
        if !self.tokens.advance_if_matches(Token::Id) {
            return Err(SyntaxError::MissingIdentifier {
                found: self.tokens.peek(),
            });
        }

        if !self.tokens.advance_if_matches(Token::Assign) {
            return Err(SyntaxError::MissingAssignment {
                found: self.tokens.peek(),
            });
        }

        self.parse_expression()?;

        if self.tokens.check_token(Token::RParen) {
            return Err(SyntaxError::UnbalancedParentheses {
                position: self.tokens.position(),
            });
        }

        if !self.tokens.is_at_end() {
            return Err(SyntaxError::TrailingTokens {
                position: self.tokens.position(),
                remaining: self.tokens.remaining_count(),
            });
        }

        Ok(())
    }

    /// `E -> T ( (+|-) T )*`
    pub fn parse_expression(&mut self) -> SyntaxResult<()> {
        self.parse_term()?;
        while self.tokens.consume_if(|t| t.is_additive()).is_some() {
            self.parse_term()?;
        }
        Ok(())
    }

    /// `T -> F ( (*|/) F )*`
    pub fn parse_term(&mut self) -> SyntaxResult<()> {
        self.parse_factor()?;
        while self.tokens.consume_if(|t| t.is_multiplicative()).is_some() {
            self.parse_factor()?;
        }
        Ok(())
    }

    /// `F -> id | num | ( E )`
    pub fn parse_factor(&mut self) -> SyntaxResult<()> {
        match self.tokens.peek() {
            Some(Token::Id) | Some(Token::Num) => {
                self.tokens.advance();
                Ok(())
            }
            Some(Token::LParen) => {
                self.tokens.advance();
                self.enter_group()?;
                self.parse_expression()?;

                if !self.tokens.advance_if_matches(Token::RParen) {
                    return Err(SyntaxError::MissingCloseParen {
                        found: self.tokens.peek(),
                    });
                }
                self.depth -= 1;
                Ok(())
            }
            found => Err(SyntaxError::MissingOperand { found }),
        }
    }

    fn enter_group(&mut self) -> SyntaxResult<()> {
        if self.depth >= MAX_PARSE_DEPTH {
            log_debug!("Parenthesis nesting limit reached",
                "depth" => self.depth + 1,
                "position" => self.tokens.position()
            );
            return Err(SyntaxError::MaxNestingDepth {
                depth: self.depth + 1,
            });
        }
        self.depth += 1;
        self.max_depth_seen = self.max_depth_seen.max(self.depth);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use Token::*;

    fn parse(tokens: &[Token]) -> SyntaxResult<()> {
        Parser::new(tokens).parse_statement()
    }

    fn nested(depth: usize) -> Vec<Token> {
        let mut tokens = vec![Id, Assign];
        tokens.extend(std::iter::repeat(LParen).take(depth));
        tokens.push(Num);
        tokens.extend(std::iter::repeat(RParen).take(depth));
        tokens
    }

    #[test]
    fn test_accepts_simple_assignments() {
        assert!(parse(&[Id, Assign, Num]).is_ok());
        assert!(parse(&[Id, Assign, Id]).is_ok());
        assert!(parse(&[Id, Assign, Num, Plus, Num, Star, Id]).is_ok());
        assert!(parse(&[Id, Assign, Num, Minus, Num, Slash, Num]).is_ok());
    }

    #[test]
    fn test_accepts_parenthesized_expression() {
        assert!(parse(&[Id, Assign, LParen, Num, Plus, Num, RParen]).is_ok());
        assert!(parse(&[
            Id, Assign, Num, Plus, Num, Star, LParen, Num, Minus, Num, RParen
        ])
        .is_ok());
        assert!(parse(&[Id, Assign, LParen, LParen, Id, RParen, RParen, Star, Num]).is_ok());
    }

    #[test]
    fn test_missing_identifier() {
        assert_matches!(parse(&[]), Err(SyntaxError::MissingIdentifier { found: None }));
        assert_matches!(
            parse(&[Num, Assign, Num]),
            Err(SyntaxError::MissingIdentifier { found: Some(Num) })
        );
    }

    #[test]
    fn test_missing_assignment() {
        assert_matches!(parse(&[Id]), Err(SyntaxError::MissingAssignment { found: None }));
        assert_matches!(
            parse(&[Id, Plus, Num]),
            Err(SyntaxError::MissingAssignment { found: Some(Plus) })
        );
    }

    #[test]
    fn test_missing_operand() {
        assert_matches!(
            parse(&[Id, Assign]),
            Err(SyntaxError::MissingOperand { found: None })
        );
        assert_matches!(
            parse(&[Id, Assign, Num, Plus]),
            Err(SyntaxError::MissingOperand { found: None })
        );
        assert_matches!(
            parse(&[Id, Assign, Star, Num]),
            Err(SyntaxError::MissingOperand { found: Some(Star) })
        );
        assert_matches!(
            parse(&[Id, Assign, LParen, RParen]),
            Err(SyntaxError::MissingOperand { found: Some(RParen) })
        );
    }

    #[test]
    fn test_unclosed_parenthesis() {
        assert_matches!(
            parse(&[Id, Assign, LParen, Num, Plus, Num]),
            Err(SyntaxError::MissingCloseParen { found: None })
        );
        assert_matches!(
            parse(&[Id, Assign, LParen, Num, Num]),
            Err(SyntaxError::MissingCloseParen { found: Some(Num) })
        );
    }

    #[test]
    fn test_extra_close_parenthesis() {
        assert_matches!(
            parse(&[Id, Assign, Num, Plus, Num, RParen]),
            Err(SyntaxError::UnbalancedParentheses { position: 5 })
        );
    }

    #[test]
    fn test_trailing_tokens() {
        assert_matches!(
            parse(&[Id, Assign, Num, Num]),
            Err(SyntaxError::TrailingTokens { position: 3, remaining: 1 })
        );
        assert_matches!(
            parse(&[Id, Assign, Num, Assign, Num]),
            Err(SyntaxError::TrailingTokens { position: 3, remaining: 2 })
        );
        assert_matches!(
            parse(&[Id, Assign, Num, LParen, Num, RParen]),
            Err(SyntaxError::TrailingTokens { position: 3, remaining: 3 })
        );
    }

    #[test]
    fn test_nesting_limit() {
        let deepest = nested(MAX_PARSE_DEPTH);
        let mut parser = Parser::new(&deepest);
        assert!(parser.parse_statement().is_ok());
        assert_eq!(parser.max_depth(), MAX_PARSE_DEPTH);
        assert_eq!(parser.position(), deepest.len());

        let too_deep = nested(MAX_PARSE_DEPTH + 1);
        assert_matches!(
            parse(&too_deep),
            Err(SyntaxError::MaxNestingDepth { depth }) if depth == MAX_PARSE_DEPTH + 1
        );
    }

    #[test]
    fn test_cursor_never_rewinds() {
        let tokens = [Id, Assign, Num, Plus, LParen, Id, RParen];
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.position(), 0);
        parser.parse_statement().unwrap();
        assert_eq!(parser.position(), tokens.len());
    }
}
