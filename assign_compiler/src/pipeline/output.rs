//! Console rendering and serializable summaries of pipeline results

use crate::lexical::LexicalMetrics;
use crate::pipeline::{PipelineError, PipelineResult};
use crate::tokens::Token;
use serde::Serialize;

/// Verdict line for an accepted statement
pub const ACCEPTED: &str = "Aceptado";

/// Prefix of the verdict line for a rejected statement
pub const SYNTAX_ERROR_PREFIX: &str = "sintax error:";

/// `Tokens: ['id', '=', 'num']`
pub fn render_tokens(tokens: &[Token]) -> String {
    let quoted: Vec<String> = tokens.iter().map(|t| format!("'{}'", t)).collect();
    format!("Tokens: [{}]", quoted.join(", "))
}

/// Verdict line for a parsed statement, or the rejection message for bad input
pub fn render_verdict(outcome: &Result<(), PipelineError>) -> String {
    match outcome {
        Ok(()) => ACCEPTED.to_string(),
        Err(PipelineError::SyntaxAnalysis(error)) => format!("{} {}", SYNTAX_ERROR_PREFIX, error),
        Err(PipelineError::LexicalAnalysis(error)) => format!("invalid input: {}", error),
    }
}

/// Full text report: token listing then verdict; lexical rejections print only the message
pub fn render_text(result: &PipelineResult) -> String {
    if result.is_lexical_rejection() {
        return render_verdict(&result.outcome);
    }
    format!(
        "{}\n{}",
        render_tokens(&result.tokens),
        render_verdict(&result.outcome)
    )
}

/// Serializable summary used for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub input: String,
    pub tokens: Vec<Token>,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub metrics: LexicalMetrics,
    pub duration_us: u128,
}

impl PipelineOutput {
    pub fn new(result: &PipelineResult) -> Self {
        let error = result.error();
        Self {
            input: result.input.clone(),
            tokens: result.tokens.clone(),
            accepted: result.is_accepted(),
            stage: error.map(|e| e.stage()),
            error_code: error.map(|e| e.error_code().as_str()),
            error: error.map(|e| e.detail()),
            metrics: result.lexical_metrics.clone(),
            duration_us: result.processing_duration.as_micros(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&PipelineResult> for PipelineOutput {
    fn from(result: &PipelineResult) -> Self {
        Self::new(result)
    }
}
