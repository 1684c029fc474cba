// Internal modules
pub mod config;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod syntax;
pub mod tokens;

// Re-export key types for library consumers
pub use config::{LexicalPreferences, RuntimePreferences};
pub use lexical::{tokenize, AutomatonTable, LexerError, Tokenizer};
pub use pipeline::{process_line, PipelineError, PipelineResult};
pub use syntax::{parse, SyntaxError};
pub use tokens::Token;

pub use pipeline::output::PipelineOutput;
