//! Consolidated error codes and classification system
//!
//! Single source of truth for all codes emitted by the tokenizer, parser and
//! pipeline, together with their behavioral metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const CONFIGURATION_ERROR: Code = Code::new("ERR002");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E020");
    pub const INPUT_TOO_LONG: Code = Code::new("E021");
    pub const TOO_MANY_TOKENS: Code = Code::new("E027");
    pub const NO_TRANSITION: Code = Code::new("E029");
}

/// Syntax analysis error codes
pub mod syntax {
    use super::Code;

    pub const MISSING_IDENTIFIER: Code = Code::new("E040");
    pub const MISSING_ASSIGNMENT: Code = Code::new("E041");
    pub const MISSING_OPERAND: Code = Code::new("E042");
    pub const MISSING_CLOSE_PAREN: Code = Code::new("E043");
    pub const UNBALANCED_PARENTHESES: Code = Code::new("E044");
    pub const TRAILING_TOKENS: Code = Code::new("E045");
    pub const MAX_NESTING_DEPTH: Code = Code::new("E047");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const STATEMENT_ACCEPTED: Code = Code::new("I040");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

static METADATA: &[ErrorMetadata] = &[
    // System errors
    ErrorMetadata::new(
        "ERR002",
        "System",
        Severity::High,
        false,
        true,
        "Configuration could not be loaded",
        "Check the configuration file path and TOML syntax",
    ),
    // Lexical errors
    ErrorMetadata::new(
        "E020",
        "Lexical",
        Severity::High,
        false,
        false,
        "Input contains a character outside the allowed alphabet",
        "Use only letters, digits, spaces and + - * / = ( )",
    ),
    ErrorMetadata::new(
        "E021",
        "Lexical",
        Severity::High,
        false,
        false,
        "Input line exceeds the maximum accepted length",
        "Split the statement or shorten identifiers",
    ),
    ErrorMetadata::new(
        "E027",
        "Lexical",
        Severity::High,
        false,
        false,
        "Input produced more tokens than allowed",
        "Simplify the expression",
    ),
    ErrorMetadata::new(
        "E029",
        "Lexical",
        Severity::Critical,
        false,
        true,
        "Automaton has no transition from the start state for a character",
        "Extend the transition table before widening the alphabet",
    ),
    // Syntax errors
    ErrorMetadata::new(
        "E040",
        "Syntax",
        Severity::Medium,
        true,
        false,
        "Statement does not start with an identifier",
        "Begin the statement with the assigned variable name",
    ),
    ErrorMetadata::new(
        "E041",
        "Syntax",
        Severity::Medium,
        true,
        false,
        "Identifier is not followed by '='",
        "Insert '=' after the assigned variable name",
    ),
    ErrorMetadata::new(
        "E042",
        "Syntax",
        Severity::Medium,
        true,
        false,
        "Expected an identifier, number or '('",
        "Supply an operand where the expression expects one",
    ),
    ErrorMetadata::new(
        "E043",
        "Syntax",
        Severity::Medium,
        true,
        false,
        "Parenthesized expression is not closed",
        "Add the missing ')'",
    ),
    ErrorMetadata::new(
        "E044",
        "Syntax",
        Severity::Medium,
        true,
        false,
        "Closing parenthesis without a matching '('",
        "Remove the extra ')' or add the matching '('",
    ),
    ErrorMetadata::new(
        "E045",
        "Syntax",
        Severity::Medium,
        true,
        false,
        "Tokens remain after a complete expression",
        "Remove the trailing tokens or join them with an operator",
    ),
    ErrorMetadata::new(
        "E047",
        "Syntax",
        Severity::High,
        false,
        true,
        "Parenthesis nesting exceeds the parser limit",
        "Reduce the nesting depth of the expression",
    ),
    // Success codes
    ErrorMetadata::new(
        "I001",
        "System",
        Severity::Low,
        true,
        false,
        "Logging system initialized",
        "No action required",
    ),
    ErrorMetadata::new(
        "I020",
        "Lexical",
        Severity::Low,
        true,
        false,
        "Tokenization completed",
        "No action required",
    ),
    ErrorMetadata::new(
        "I040",
        "Syntax",
        Severity::Low,
        true,
        false,
        "Statement accepted by the grammar",
        "No action required",
    ),
];

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, &'static ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, &'static ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| METADATA.iter().map(|meta| (meta.code, meta)).collect())
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code).copied()
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for a code
pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for a code
pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from a code
pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_has_metadata() {
        let all = [
            system::CONFIGURATION_ERROR,
            lexical::INVALID_CHARACTER,
            lexical::INPUT_TOO_LONG,
            lexical::TOO_MANY_TOKENS,
            lexical::NO_TRANSITION,
            syntax::MISSING_IDENTIFIER,
            syntax::MISSING_ASSIGNMENT,
            syntax::MISSING_OPERAND,
            syntax::MISSING_CLOSE_PAREN,
            syntax::UNBALANCED_PARENTHESES,
            syntax::TRAILING_TOKENS,
            syntax::MAX_NESTING_DEPTH,
            success::SYSTEM_INITIALIZATION_COMPLETED,
            success::TOKENIZATION_COMPLETE,
            success::STATEMENT_ACCEPTED,
        ];

        for code in all {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
        assert_eq!(get_error_registry().len(), all.len());
    }

    #[test]
    fn test_unknown_code_fallbacks() {
        assert_eq!(get_description("Z999"), "Unknown error");
        assert_eq!(get_category("Z999"), "Unknown");
        assert_eq!(get_severity("Z999"), Severity::Medium);
        assert!(is_recoverable("Z999"));
        assert!(!requires_halt("Z999"));
    }

    #[test]
    fn test_syntax_errors_are_recoverable() {
        assert!(is_recoverable(syntax::TRAILING_TOKENS.as_str()));
        assert_eq!(get_category(syntax::MISSING_OPERAND.as_str()), "Syntax");
        assert!(requires_halt(lexical::NO_TRANSITION.as_str()));
    }
}
