use crate::lexical::LexicalMetrics;
use crate::pipeline::PipelineError;
use crate::syntax::SyntaxError;
use crate::tokens::Token;
use std::time::Duration;

/// Outcome of tokenizing and parsing one line
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// The line after trimming
    pub input: String,
    /// Empty when the line was rejected lexically
    pub tokens: Vec<Token>,
    pub outcome: Result<(), PipelineError>,
    pub lexical_metrics: LexicalMetrics,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn is_accepted(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn is_lexical_rejection(&self) -> bool {
        matches!(&self.outcome, Err(error) if error.is_lexical())
    }

    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match &self.outcome {
            Err(PipelineError::SyntaxAnalysis(error)) => Some(error),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PipelineError> {
        self.outcome.as_ref().err()
    }

    pub fn log_summary(&self) {
        crate::log_debug!("Line processing finished",
            "accepted" => self.is_accepted(),
            "token_count" => self.tokens.len(),
            "duration_us" => self.processing_duration.as_micros()
        );
    }
}
