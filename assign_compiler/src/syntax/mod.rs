//! Syntax analysis - grammar check of a token sequence
//!
//! Accepts or rejects; no tree is built.

mod error;
mod parser;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::Parser;

use crate::logging::codes;
use crate::tokens::Token;
use crate::{log_debug, log_error, log_success};

/// Check a token sequence against `S -> id = E`
pub fn parse(tokens: &[Token]) -> SyntaxResult<()> {
    log_debug!("Starting syntax analysis", "tokens" => tokens.len());

    let mut parser = Parser::new(tokens);
    let result = parser.parse_statement();

    match &result {
        Ok(()) => {
            log_success!(codes::success::STATEMENT_ACCEPTED, "Statement accepted",
                "tokens" => tokens.len(),
                "max_depth" => parser.max_depth()
            );
        }
        Err(error) => {
            log_error!(error.error_code(), "Syntax analysis failed",
                "error" => error,
                "position" => parser.position()
            );
        }
    }

    result
}

/// Validate that every syntax code is registered
pub fn init_syntax_logging() -> Result<(), String> {
    let syntax_codes = [
        codes::syntax::MISSING_IDENTIFIER,
        codes::syntax::MISSING_ASSIGNMENT,
        codes::syntax::MISSING_OPERAND,
        codes::syntax::MISSING_CLOSE_PAREN,
        codes::syntax::UNBALANCED_PARENTHESES,
        codes::syntax::TRAILING_TOKENS,
        codes::syntax::MAX_NESTING_DEPTH,
        codes::success::STATEMENT_ACCEPTED,
    ];

    for code in &syntax_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Syntax code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}
