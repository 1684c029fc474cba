//! Lexical analysis
//!
//! Character classification, the automaton table and the tokenizer that
//! drives them over one input line.

pub mod analyzer;
pub mod automaton;
pub mod category;

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::Token;

pub use analyzer::{Action, LastToken, LexerError, LexicalMetrics, Tokenizer};
pub use automaton::{AutomatonTable, State, Transition};
pub use category::{Category, CharClass};

/// Tokenize with built-in defaults and the standard table
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexerError> {
    Tokenizer::new().tokenize(text)
}

/// Tokenize with custom runtime preferences (limits remain compile-time)
pub fn tokenize_with_preferences(
    text: &str,
    preferences: LexicalPreferences,
) -> Result<Vec<Token>, LexerError> {
    Tokenizer::with_preferences(preferences).tokenize(text)
}

/// Validate that lexical codes are registered and limits are usable
pub fn validate_tokenization() -> Result<(), String> {
    let lexical_codes = [
        codes::lexical::INVALID_CHARACTER,
        codes::lexical::INPUT_TOO_LONG,
        codes::lexical::TOO_MANY_TOKENS,
        codes::lexical::NO_TRANSITION,
        codes::success::TOKENIZATION_COMPLETE,
    ];

    for code in &lexical_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    if MAX_INPUT_LENGTH == 0 {
        return Err("MAX_INPUT_LENGTH cannot be zero".to_string());
    }
    if MAX_TOKEN_COUNT == 0 {
        return Err("MAX_TOKEN_COUNT cannot be zero".to_string());
    }

    let table = AutomatonTable::standard();
    let start = table.start_state();
    if table.is_accepting(start) {
        return Err("Start state must not be accepting".to_string());
    }
    for category in [Category::Char, Category::Num] {
        if table.lookup(start, category).is_none() {
            return Err(format!("Start state has no transition for '{}'", category));
        }
    }

    crate::log_debug!("Lexical limits validated",
        "max_input_length" => MAX_INPUT_LENGTH,
        "max_token_count" => MAX_TOKEN_COUNT
    );

    Ok(())
}
