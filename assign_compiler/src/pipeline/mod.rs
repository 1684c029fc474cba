//! Tokenize then parse one input line

mod error;
pub mod output;
mod result;
mod validation;

pub use error::PipelineError;
pub use output::{render_text, render_tokens, render_verdict, PipelineOutput};
pub use result::PipelineResult;
pub use validation::validate_pipeline;

use crate::config::runtime::LexicalPreferences;
use crate::lexical::Tokenizer;
use std::time::Instant;

/// Process one line with the given lexical preferences
///
/// Surrounding whitespace is ignored. A lexical rejection leaves `tokens`
/// empty and the parser is not run.
pub fn process_line(text: &str, preferences: &LexicalPreferences) -> PipelineResult {
    let start_time = Instant::now();
    let input = text.trim();

    crate::log_info!("Processing input line",
        "length" => input.chars().count(),
        "strip_all_spaces" => preferences.strip_all_spaces
    );

    let mut tokenizer = Tokenizer::with_preferences(preferences.clone());
    let (tokens, outcome) = match tokenizer.tokenize(input) {
        Ok(tokens) => {
            let outcome = crate::syntax::parse(&tokens).map_err(PipelineError::from);
            (tokens, outcome)
        }
        Err(error) => (Vec::new(), Err(PipelineError::from(error))),
    };

    let result = PipelineResult {
        input: input.to_string(),
        tokens,
        outcome,
        lexical_metrics: tokenizer.metrics().clone(),
        processing_duration: start_time.elapsed(),
    };
    result.log_summary();
    result
}

/// Process one line with built-in defaults
pub fn process_line_default(text: &str) -> PipelineResult {
    process_line(text, &LexicalPreferences::baseline())
}
