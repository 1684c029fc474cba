pub mod compile_time {
    pub mod lexical {
        /// Maximum accepted input line length in characters
        /// SECURITY: Bounds tokenizer work per call
        pub const MAX_INPUT_LENGTH: usize = 4096;

        /// Maximum number of tokens produced for one line
        /// SECURITY: Prevents token explosion on adversarial input
        pub const MAX_TOKEN_COUNT: usize = 2048;
    }

    pub mod syntax {
        /// Maximum parenthesis nesting depth accepted by the parser
        /// SECURITY: Bounds recursion in the expression grammar
        pub const MAX_PARSE_DEPTH: usize = 256;
    }

    pub mod logging {
        /// Longest context value kept in a log event; longer values are cut
        pub const MAX_LOG_CONTEXT_LENGTH: usize = 256;
    }
}
