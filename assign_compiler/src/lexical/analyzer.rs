//! Table-driven tokenizer for assignment statements
//!
//! Each character goes through two independent decisions: whether the
//! pending lexeme must be flushed before it, then what to do with the
//! character itself (skip it, emit it as a literal token, or feed it to the
//! automaton).

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::lexical::automaton::{AutomatonTable, State};
use crate::lexical::category::{classify, find_invalid, Category, CharClass};
use crate::logging::codes;
use crate::tokens::{Token, TokenClass};
use crate::{log_debug, log_error, log_success};

/// Lexical analysis errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Invalid character: '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Input too long: {length} characters (max {MAX_INPUT_LENGTH})")]
    InputTooLong { length: usize },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },

    #[error("No transition for '{character}' at position {position}, even from the start state")]
    NoTransition { character: char, position: usize },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::InputTooLong { .. } => codes::lexical::INPUT_TOO_LONG,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
            LexerError::NoTransition { .. } => codes::lexical::NO_TRANSITION,
        }
    }
}

/// Per-run tokenization counters
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LexicalMetrics {
    pub input_length: usize,
    pub total_tokens: usize,
    pub identifier_tokens: usize,
    pub number_tokens: usize,
    pub operator_tokens: usize,
    pub paren_tokens: usize,
    pub skipped_spaces: usize,
    /// `+`/`-` merged into a following number
    pub folded_signs: usize,
    /// Pending lexemes thrown away by a failed transition
    pub discarded_lexemes: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: Token) {
        self.total_tokens += 1;
        match token {
            Token::Id => self.identifier_tokens += 1,
            Token::Num => self.number_tokens += 1,
            _ => match token.class() {
                TokenClass::Delimiter => self.paren_tokens += 1,
                _ => self.operator_tokens += 1,
            },
        }
    }
}

/// Role of the most recently emitted token, as far as sign folding cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastToken {
    Operand,
    Operator,
    OpenParen,
    CloseParen,
}

impl From<Token> for LastToken {
    fn from(token: Token) -> Self {
        match token {
            Token::Id | Token::Num => LastToken::Operand,
            Token::LParen => LastToken::OpenParen,
            Token::RParen => LastToken::CloseParen,
            Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Assign => {
                LastToken::Operator
            }
        }
    }
}

/// A `+`/`-` may start a number only at the beginning, after an operator or after `(`
pub fn allows_sign_folding(last_token: Option<LastToken>) -> bool {
    matches!(
        last_token,
        None | Some(LastToken::Operator) | Some(LastToken::OpenParen)
    )
}

/// What to do with the current character once any flush has happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Skip,
    Emit(Token),
    Feed(Category),
}

/// Transient state for one tokenize call
#[derive(Debug, Clone)]
struct Cursor {
    state: State,
    lexeme: String,
    last_token: Option<LastToken>,
}

impl Cursor {
    fn new(start: State) -> Self {
        Self {
            state: start,
            lexeme: String::new(),
            last_token: None,
        }
    }

    fn reset(&mut self, start: State) {
        self.lexeme.clear();
        self.state = start;
    }
}

/// Token to flush before `c` is handled, if any
///
/// Only a literal symbol ends a lexeme; spaces do not, so `ab cd` stays one
/// identifier.
fn flush_before(c: char, cursor: &Cursor, table: &AutomatonTable) -> Option<Token> {
    let is_symbol = matches!(classify(c), CharClass::Symbol(_));
    if is_symbol && !cursor.lexeme.is_empty() && table.is_accepting(cursor.state) {
        Some(table.token_for(cursor.state))
    } else {
        None
    }
}

/// Decide how to handle `c`, given the character after it and the last emitted token
pub fn action_for(c: char, next: Option<char>, last_token: Option<LastToken>) -> Action {
    match classify(c) {
        CharClass::Whitespace | CharClass::Invalid => Action::Skip,
        CharClass::Symbol(token @ (Token::Plus | Token::Minus)) => {
            let digit_follows = next.is_some_and(|n| n.is_ascii_digit());
            if digit_follows && allows_sign_folding(last_token) {
                Action::Feed(Category::Symbol(token))
            } else {
                Action::Emit(token)
            }
        }
        CharClass::Symbol(token) => Action::Emit(token),
        class @ (CharClass::Letter | CharClass::Digit) => {
            class.category().map_or(Action::Skip, Action::Feed)
        }
    }
}

/// Tokenizer driven by an immutable automaton table
pub struct Tokenizer {
    table: AutomatonTable,
    preferences: LexicalPreferences,
    metrics: LexicalMetrics,
}

impl Tokenizer {
    /// Tokenizer with built-in defaults and the standard table
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::baseline())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            table: AutomatonTable::for_preferences(&preferences),
            preferences,
            metrics: LexicalMetrics::default(),
        }
    }

    /// Tokenizer over a caller-supplied table
    pub fn with_table(table: AutomatonTable, preferences: LexicalPreferences) -> Self {
        Self {
            table,
            preferences,
            metrics: LexicalMetrics::default(),
        }
    }

    pub fn table(&self) -> &AutomatonTable {
        &self.table
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Metrics of the last `tokenize` call
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Tokenize one line
    ///
    /// The whole line is validated against the alphabet first; any violation
    /// rejects it without producing tokens.
    pub fn tokenize(&mut self, text: &str) -> Result<Vec<Token>, LexerError> {
        self.metrics = LexicalMetrics::default();

        let length = text.chars().count();
        if length > MAX_INPUT_LENGTH {
            let error = LexerError::InputTooLong { length };
            log_error!(error.error_code(), "Input exceeds length limit",
                "length" => length,
                "limit" => MAX_INPUT_LENGTH
            );
            return Err(error);
        }

        if let Some((position, character)) = find_invalid(text) {
            let error = LexerError::InvalidCharacter {
                character,
                position,
            };
            log_error!(error.error_code(), "Character outside the input alphabet",
                "character" => format!("{:?}", character),
                "position" => position
            );
            return Err(error);
        }

        let chars: Vec<char> = if self.preferences.strip_all_spaces {
            text.chars().filter(|c| *c != ' ').collect()
        } else {
            text.chars().collect()
        };

        log_debug!("Starting tokenization",
            "input_length" => length,
            "strip_all_spaces" => self.preferences.strip_all_spaces,
            "alphanumeric_identifiers" => self.preferences.alphanumeric_identifiers
        );

        let start = self.table.start_state();
        let mut cursor = Cursor::new(start);
        let mut tokens = Vec::new();

        for (position, &c) in chars.iter().enumerate() {
            if let Some(token) = flush_before(c, &cursor, &self.table) {
                self.push_token(&mut tokens, token, &mut cursor)?;
                cursor.reset(start);
            }

            match action_for(c, chars.get(position + 1).copied(), cursor.last_token) {
                Action::Skip => {
                    if self.preferences.collect_metrics {
                        self.metrics.skipped_spaces += 1;
                    }
                }
                Action::Emit(token) => self.push_token(&mut tokens, token, &mut cursor)?,
                Action::Feed(category) => self.step(c, position, category, &mut cursor)?,
            }
        }

        if !cursor.lexeme.is_empty() && self.table.is_accepting(cursor.state) {
            let token = self.table.token_for(cursor.state);
            self.push_token(&mut tokens, token, &mut cursor)?;
        }

        if self.preferences.collect_metrics {
            self.metrics.input_length = length;
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed",
            "token_count" => tokens.len(),
            "folded_signs" => self.metrics.folded_signs,
            "discarded_lexemes" => self.metrics.discarded_lexemes
        );

        Ok(tokens)
    }

    /// Advance the automaton by one category
    ///
    /// A missing transition discards the pending lexeme and retries the same
    /// character from the start state.
    fn step(
        &mut self,
        c: char,
        position: usize,
        category: Category,
        cursor: &mut Cursor,
    ) -> Result<(), LexerError> {
        let start = self.table.start_state();

        let next_state = match self.table.lookup(cursor.state, category) {
            Some(state) => state,
            None => {
                if !cursor.lexeme.is_empty() {
                    log_debug!("Discarding lexeme after failed transition",
                        "lexeme" => cursor.lexeme.as_str(),
                        "character" => c,
                        "position" => position
                    );
                    if self.preferences.collect_metrics {
                        self.metrics.discarded_lexemes += 1;
                    }
                }
                cursor.reset(start);

                match self.table.lookup(start, category) {
                    Some(state) => state,
                    None => {
                        let error = LexerError::NoTransition {
                            character: c,
                            position,
                        };
                        log_error!(error.error_code(), "Start state has no transition",
                            "character" => c,
                            "category" => category,
                            "position" => position
                        );
                        return Err(error);
                    }
                }
            }
        };

        if matches!(category, Category::Symbol(_)) && self.preferences.collect_metrics {
            self.metrics.folded_signs += 1;
        }

        cursor.state = next_state;
        cursor.lexeme.push(c);
        Ok(())
    }

    fn push_token(
        &mut self,
        tokens: &mut Vec<Token>,
        token: Token,
        cursor: &mut Cursor,
    ) -> Result<(), LexerError> {
        if tokens.len() >= MAX_TOKEN_COUNT {
            let error = LexerError::TooManyTokens {
                count: tokens.len() + 1,
            };
            log_error!(error.error_code(), "Token limit exceeded",
                "token_count" => tokens.len() + 1,
                "limit" => MAX_TOKEN_COUNT
            );
            return Err(error);
        }

        tokens.push(token);
        cursor.last_token = Some(LastToken::from(token));
        if self.preferences.collect_metrics {
            self.metrics.record_token(token);
        }
        Ok(())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::automaton::Transition;
    use assert_matches::assert_matches;
    use Token::*;

    fn tokenize(text: &str) -> Vec<Token> {
        Tokenizer::new().tokenize(text).unwrap()
    }

    fn tokenize_with(text: &str, preferences: LexicalPreferences) -> Vec<Token> {
        Tokenizer::with_preferences(preferences).tokenize(text).unwrap()
    }

    fn stripping() -> LexicalPreferences {
        LexicalPreferences {
            strip_all_spaces: true,
            ..LexicalPreferences::baseline()
        }
    }

    fn alphanumeric() -> LexicalPreferences {
        LexicalPreferences {
            alphanumeric_identifiers: true,
            ..LexicalPreferences::baseline()
        }
    }

    #[test]
    fn test_letters_make_one_identifier() {
        assert_eq!(tokenize("abc"), vec![Id]);
        assert_eq!(tokenize("x"), vec![Id]);
        assert_eq!(tokenize(&"q".repeat(500)), vec![Id]);
    }

    #[test]
    fn test_digits_make_one_number() {
        assert_eq!(tokenize("42"), vec![Num]);
        assert_eq!(tokenize("0"), vec![Num]);
        assert_eq!(tokenize("1234567890"), vec![Num]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_sign_folding_after_operator() {
        assert_eq!(tokenize("x=-5"), vec![Id, Assign, Num]);
        assert_eq!(tokenize("x=+5"), vec![Id, Assign, Num]);
        assert_eq!(tokenize("x=2*-3"), vec![Id, Assign, Num, Star, Num]);
    }

    #[test]
    fn test_minus_after_operand_is_operator() {
        assert_eq!(tokenize("x=5-3"), vec![Id, Assign, Num, Minus, Num]);
        assert_eq!(tokenize("a-5"), vec![Id, Minus, Num]);
        assert_eq!(tokenize("x=(1)-2"), vec![Id, Assign, LParen, Num, RParen, Minus, Num]);
    }

    #[test]
    fn test_sign_folding_at_start_and_after_paren() {
        assert_eq!(tokenize("-5-3"), vec![Num, Minus, Num]);
        assert_eq!(tokenize("x=(-5)"), vec![Id, Assign, LParen, Num, RParen]);
    }

    #[test]
    fn test_sign_without_following_digit_is_operator() {
        assert_eq!(tokenize("x=-a"), vec![Id, Assign, Minus, Id]);
        assert_eq!(tokenize("x=--5"), vec![Id, Assign, Minus, Num]);
        assert_eq!(tokenize("x=+-5"), vec![Id, Assign, Plus, Num]);
        assert_eq!(tokenize("x=5-"), vec![Id, Assign, Num, Minus]);
    }

    #[test]
    fn test_spaces_do_not_flush() {
        assert_eq!(tokenize("ab cd"), vec![Id]);
        assert_eq!(tokenize("1 2"), vec![Num]);
        assert_eq!(tokenize("x = 5"), vec![Id, Assign, Num]);
    }

    #[test]
    fn test_space_blocks_sign_lookahead_unless_stripped() {
        assert_eq!(tokenize("x = - 5"), vec![Id, Assign, Minus, Num]);
        assert_eq!(tokenize_with("x = - 5", stripping()), vec![Id, Assign, Num]);
        assert_eq!(tokenize("x = -5"), vec![Id, Assign, Num]);
    }

    #[test]
    fn test_failed_transition_discards_lexeme() {
        assert_eq!(tokenize("12ab"), vec![Id]);
        assert_eq!(tokenize("x1"), vec![Num]);
        assert_eq!(tokenize("ab5"), vec![Num]);
        assert_eq!(tokenize("y=x1+2"), vec![Id, Assign, Num, Plus, Num]);

        let mut tokenizer = Tokenizer::new();
        tokenizer.tokenize("12ab").unwrap();
        assert_eq!(tokenizer.metrics().discarded_lexemes, 1);
    }

    #[test]
    fn test_alphanumeric_identifiers() {
        assert_eq!(tokenize_with("x1", alphanumeric()), vec![Id]);
        assert_eq!(tokenize_with("y=x1+2", alphanumeric()), vec![Id, Assign, Id, Plus, Num]);
        assert_eq!(tokenize_with("12ab", alphanumeric()), vec![Id]);
    }

    #[test]
    fn test_full_statement() {
        assert_eq!(
            tokenize("total=12+3*(4-1)"),
            vec![Id, Assign, Num, Plus, Num, Star, LParen, Num, Minus, Num, RParen]
        );
    }

    #[test]
    fn test_invalid_character_rejects_whole_line() {
        let mut tokenizer = Tokenizer::new();
        let result = tokenizer.tokenize("x=5#3");
        assert_matches!(
            result,
            Err(LexerError::InvalidCharacter { character: '#', position: 3 })
        );
        assert_eq!(tokenizer.metrics().total_tokens, 0);

        assert_matches!(
            Tokenizer::new().tokenize("x\t= 1"),
            Err(LexerError::InvalidCharacter { character: '\t', position: 1 })
        );
        assert_matches!(
            Tokenizer::new().tokenize("ñ=1"),
            Err(LexerError::InvalidCharacter { character: 'ñ', .. })
        );
    }

    #[test]
    fn test_invalid_character_position_ignores_stripping() {
        let mut tokenizer = Tokenizer::with_preferences(stripping());
        assert_matches!(
            tokenizer.tokenize("x = 5 . 3"),
            Err(LexerError::InvalidCharacter { character: '.', position: 6 })
        );
    }

    #[test]
    fn test_input_length_limit() {
        let text = "a".repeat(MAX_INPUT_LENGTH + 1);
        assert_matches!(
            Tokenizer::new().tokenize(&text),
            Err(LexerError::InputTooLong { length }) if length == MAX_INPUT_LENGTH + 1
        );
        assert_eq!(tokenize(&"a".repeat(MAX_INPUT_LENGTH)), vec![Id]);
    }

    #[test]
    fn test_token_limit() {
        let text = "*".repeat(MAX_TOKEN_COUNT + 1);
        assert_matches!(
            Tokenizer::new().tokenize(&text),
            Err(LexerError::TooManyTokens { count }) if count == MAX_TOKEN_COUNT + 1
        );
        assert_eq!(tokenize(&"*".repeat(MAX_TOKEN_COUNT)).len(), MAX_TOKEN_COUNT);
    }

    #[test]
    fn test_missing_start_transition_is_an_error() {
        let table = AutomatonTable::new(
            vec![Transition::new(State::Start, Category::Char, State::InIdentifier)],
            vec![State::InIdentifier],
            State::InIdentifier,
        );
        let mut tokenizer = Tokenizer::with_table(table, LexicalPreferences::baseline());

        assert_eq!(tokenizer.tokenize("abc").unwrap(), vec![Id]);
        assert_matches!(
            tokenizer.tokenize("ab7"),
            Err(LexerError::NoTransition { character: '7', position: 2 })
        );
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let mut tokenizer = Tokenizer::new();
        for text in ["x=-5", "total=12+3*(4-1)", "12ab", "ab cd", "-5-3"] {
            let first = tokenizer.tokenize(text).unwrap();
            let second = tokenizer.tokenize(text).unwrap();
            assert_eq!(first, second, "{}", text);
        }
    }

    #[test]
    fn test_metrics() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.tokenize("x = (-5) * y").unwrap();
        let metrics = tokenizer.metrics();

        assert_eq!(metrics.input_length, 12);
        assert_eq!(metrics.total_tokens, 7);
        assert_eq!(metrics.identifier_tokens, 2);
        assert_eq!(metrics.number_tokens, 1);
        assert_eq!(metrics.operator_tokens, 2);
        assert_eq!(metrics.paren_tokens, 2);
        assert_eq!(metrics.folded_signs, 1);
        assert_eq!(metrics.skipped_spaces, 4);
    }

    #[test]
    fn test_metrics_disabled() {
        let preferences = LexicalPreferences {
            collect_metrics: false,
            ..LexicalPreferences::baseline()
        };
        let mut tokenizer = Tokenizer::with_preferences(preferences);
        tokenizer.tokenize("x = 1").unwrap();
        assert_eq!(tokenizer.metrics(), &LexicalMetrics::default());
    }

    #[test]
    fn test_action_for() {
        assert_eq!(action_for(' ', Some('x'), None), Action::Skip);
        assert_eq!(action_for('a', None, None), Action::Feed(Category::Char));
        assert_eq!(action_for('7', None, None), Action::Feed(Category::Num));
        assert_eq!(action_for('=', Some('5'), None), Action::Emit(Assign));
        assert_eq!(
            action_for('-', Some('5'), Some(LastToken::Operator)),
            Action::Feed(Category::Symbol(Minus))
        );
        assert_eq!(action_for('-', Some('5'), Some(LastToken::Operand)), Action::Emit(Minus));
        assert_eq!(action_for('+', Some('5'), Some(LastToken::CloseParen)), Action::Emit(Plus));
        assert_eq!(action_for('+', None, None), Action::Emit(Plus));
    }

    #[test]
    fn test_sign_folding_contexts() {
        assert!(allows_sign_folding(None));
        assert!(allows_sign_folding(Some(LastToken::Operator)));
        assert!(allows_sign_folding(Some(LastToken::OpenParen)));
        assert!(!allows_sign_folding(Some(LastToken::Operand)));
        assert!(!allows_sign_folding(Some(LastToken::CloseParen)));
    }
}
