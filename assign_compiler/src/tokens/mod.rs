//! Token system for assignment statements
//!
//! - **[`Token`]** - the nine token kinds (`id`, `num`, `+ - * / =`, `( )`)
//! - **[`TokenStream`]** - forward-only cursor used by the parser

pub mod token;
pub mod token_stream;

// Re-export key types for convenience
pub use token::{Token, TokenClass};
pub use token_stream::TokenStream;
