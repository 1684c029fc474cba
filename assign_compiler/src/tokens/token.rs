//! Token kinds produced by the tokenizer
//!
//! Tokens carry no payload: the parser only needs to know which kind of
//! lexeme was seen, never its text or value.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token kinds of the assignment language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Identifier (run of letters)
    #[serde(rename = "id")]
    Id,
    /// Numeric literal, optionally with a folded leading sign
    #[serde(rename = "num")]
    Num,

    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "*")]
    Star,
    #[serde(rename = "/")]
    Slash,
    #[serde(rename = "=")]
    Assign,

    #[serde(rename = "(")]
    LParen,
    #[serde(rename = ")")]
    RParen,
}

/// Coarse grouping of tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// `id` and `num`
    Operand,
    /// `+ - * / =`
    Operator,
    /// `(` and `)`
    Delimiter,
}

impl Token {
    /// Literal symbol token for one of `+ - * / = ( )`
    pub fn from_symbol(c: char) -> Option<Token> {
        match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            '=' => Some(Token::Assign),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            _ => None,
        }
    }

    /// Token as rendered in token listings
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Id => "id",
            Token::Num => "num",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Assign => "=",
            Token::LParen => "(",
            Token::RParen => ")",
        }
    }

    pub fn class(&self) -> TokenClass {
        match self {
            Token::Id | Token::Num => TokenClass::Operand,
            Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Assign => {
                TokenClass::Operator
            }
            Token::LParen | Token::RParen => TokenClass::Delimiter,
        }
    }

    pub fn is_operand(&self) -> bool {
        self.class() == TokenClass::Operand
    }

    pub fn is_operator(&self) -> bool {
        self.class() == TokenClass::Operator
    }

    /// `+` or `-`
    pub fn is_additive(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus)
    }

    /// `*` or `/`
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Token::Star | Token::Slash)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol_covers_symbol_alphabet() {
        for c in "+-*/=()".chars() {
            let token = Token::from_symbol(c).expect("symbol token");
            assert_eq!(token.as_str(), c.to_string());
        }
        assert_eq!(Token::from_symbol('a'), None);
        assert_eq!(Token::from_symbol(' '), None);
        assert_eq!(Token::from_symbol('#'), None);
    }

    #[test]
    fn test_token_classes() {
        assert!(Token::Id.is_operand());
        assert!(Token::Num.is_operand());
        assert!(Token::Assign.is_operator());
        assert_eq!(Token::LParen.class(), TokenClass::Delimiter);
        assert!(Token::Minus.is_additive());
        assert!(!Token::Minus.is_multiplicative());
        assert!(Token::Slash.is_multiplicative());
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&[Token::Id, Token::Assign, Token::Num]).unwrap();
        assert_eq!(json, r#"["id","=","num"]"#);
        assert_eq!(Token::RParen.to_string(), ")");
    }
}
