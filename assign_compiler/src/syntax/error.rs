//! Syntax errors for the assignment grammar
//!
//! One variant per way a token sequence can fail `S -> id = E`, plus the
//! nesting guard that keeps recursion bounded.

use crate::config::constants::compile_time::syntax::MAX_PARSE_DEPTH;
use crate::logging::{codes, Code};
use crate::tokens::Token;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Render the token found where something else was expected
fn describe_found(found: &Option<Token>) -> String {
    match found {
        Some(token) => format!("'{}'", token),
        None => "end of input".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Statement must start with an identifier, found {}", describe_found(.found))]
    MissingIdentifier { found: Option<Token> },

    #[error("Expected '=', found {}", describe_found(.found))]
    MissingAssignment { found: Option<Token> },

    #[error("Expected id, num or '(', found {}", describe_found(.found))]
    MissingOperand { found: Option<Token> },

    #[error("Expected ')', found {}", describe_found(.found))]
    MissingCloseParen { found: Option<Token> },

    #[error("Unbalanced parentheses: unmatched ')' at token {position}")]
    UnbalancedParentheses { position: usize },

    #[error("{remaining} token(s) could not be consumed, starting at token {position}")]
    TrailingTokens { position: usize, remaining: usize },

    #[error("Parenthesis nesting too deep: {depth} (max {MAX_PARSE_DEPTH})")]
    MaxNestingDepth { depth: usize },
}

impl SyntaxError {
    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::MissingIdentifier { .. } => codes::syntax::MISSING_IDENTIFIER,
            Self::MissingAssignment { .. } => codes::syntax::MISSING_ASSIGNMENT,
            Self::MissingOperand { .. } => codes::syntax::MISSING_OPERAND,
            Self::MissingCloseParen { .. } => codes::syntax::MISSING_CLOSE_PAREN,
            Self::UnbalancedParentheses { .. } => codes::syntax::UNBALANCED_PARENTHESES,
            Self::TrailingTokens { .. } => codes::syntax::TRAILING_TOKENS,
            Self::MaxNestingDepth { .. } => codes::syntax::MAX_NESTING_DEPTH,
        }
    }

    /// Token that was found instead of the expected one, when the error has one
    pub fn found(&self) -> Option<Token> {
        match self {
            Self::MissingIdentifier { found }
            | Self::MissingAssignment { found }
            | Self::MissingOperand { found }
            | Self::MissingCloseParen { found } => *found,
            Self::UnbalancedParentheses { .. } => Some(Token::RParen),
            Self::TrailingTokens { .. } | Self::MaxNestingDepth { .. } => None,
        }
    }

    /// Whether the error concerns parenthesis pairing
    pub fn is_parenthesis_error(&self) -> bool {
        matches!(
            self,
            Self::MissingCloseParen { .. } | Self::UnbalancedParentheses { .. }
        )
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }

    /// Malformed statements are expected input; only the nesting guard is not
    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }

    pub fn description(&self) -> &'static str {
        codes::get_description(self.error_code().as_str())
    }

    pub fn recommended_action(&self) -> &'static str {
        codes::get_action(self.error_code().as_str())
    }
}
