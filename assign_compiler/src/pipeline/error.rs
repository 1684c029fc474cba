use crate::lexical::LexerError;
use crate::logging::Code;
use crate::syntax::SyntaxError;

/// Pipeline processing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("Lexical analysis failed: {0}")]
    LexicalAnalysis(#[from] LexerError),

    #[error("Syntax analysis failed: {0}")]
    SyntaxAnalysis(#[from] SyntaxError),
}

impl PipelineError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::LexicalAnalysis(error) => error.error_code(),
            Self::SyntaxAnalysis(error) => error.error_code(),
        }
    }

    /// Name of the stage that rejected the input
    pub fn stage(&self) -> &'static str {
        match self {
            Self::LexicalAnalysis(_) => "lexical",
            Self::SyntaxAnalysis(_) => "syntax",
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::LexicalAnalysis(_))
    }

    /// Message of the underlying error, without the stage prefix
    pub fn detail(&self) -> String {
        match self {
            Self::LexicalAnalysis(error) => error.to_string(),
            Self::SyntaxAnalysis(error) => error.to_string(),
        }
    }
}
