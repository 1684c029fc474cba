//! Transition table for multi-character lexemes
//!
//! Only identifier runs and (optionally signed) digit runs ever go through
//! the automaton; operators and parentheses are emitted directly by the
//! tokenizer. The table therefore holds just those two paths.

use crate::config::LexicalPreferences;
use crate::lexical::category::Category;
use crate::tokens::Token;

/// Automaton states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Start,
    InIdentifier,
    /// A folded `+`/`-` waiting for its first digit
    InSign,
    InNumber,
}

impl State {
    /// Numeric state id used in table dumps
    pub fn id(self) -> u8 {
        match self {
            State::Start => 0,
            State::InIdentifier => 5,
            State::InNumber => 6,
            State::InSign => 7,
        }
    }
}

/// One `(from, category) -> to` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: State,
    pub category: Category,
    pub to: State,
}

impl Transition {
    pub const fn new(from: State, category: Category, to: State) -> Self {
        Self { from, category, to }
    }
}

/// Immutable transition table plus accept set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomatonTable {
    transitions: Vec<Transition>,
    accept_states: Vec<State>,
    identifier_state: State,
}

impl AutomatonTable {
    pub fn new(
        transitions: Vec<Transition>,
        accept_states: Vec<State>,
        identifier_state: State,
    ) -> Self {
        Self {
            transitions,
            accept_states,
            identifier_state,
        }
    }

    /// Letters-only identifiers and optionally signed digit runs
    pub fn standard() -> Self {
        use Category::*;
        use State::*;

        Self::new(
            vec![
                Transition::new(Start, Char, InIdentifier),
                Transition::new(InIdentifier, Char, InIdentifier),
                Transition::new(Start, Num, InNumber),
                Transition::new(InNumber, Num, InNumber),
                Transition::new(Start, Symbol(Token::Plus), InSign),
                Transition::new(Start, Symbol(Token::Minus), InSign),
                Transition::new(InSign, Num, InNumber),
            ],
            vec![InIdentifier, InNumber, InSign],
            InIdentifier,
        )
    }

    /// Standard table where identifiers may continue with digits (`x1`)
    pub fn alphanumeric() -> Self {
        let mut table = Self::standard();
        table.transitions.push(Transition::new(
            State::InIdentifier,
            Category::Num,
            State::InIdentifier,
        ));
        table
    }

    pub fn for_preferences(preferences: &LexicalPreferences) -> Self {
        if preferences.alphanumeric_identifiers {
            Self::alphanumeric()
        } else {
            Self::standard()
        }
    }

    pub fn start_state(&self) -> State {
        State::Start
    }

    pub fn identifier_state(&self) -> State {
        self.identifier_state
    }

    /// Destination for `(state, category)`, or `None` when no transition exists
    pub fn lookup(&self, state: State, category: Category) -> Option<State> {
        self.transitions
            .iter()
            .find(|t| t.from == state && t.category == category)
            .map(|t| t.to)
    }

    pub fn is_accepting(&self, state: State) -> bool {
        self.accept_states.contains(&state)
    }

    /// Token kind for a lexeme finalized in `state`
    pub fn token_for(&self, state: State) -> Token {
        if state == self.identifier_state {
            Token::Id
        } else {
            Token::Num
        }
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn accept_states(&self) -> &[State] {
        &self.accept_states
    }

    /// Dump of the table as `(from, to, 'category')` triples and the accept set
    pub fn render(&self) -> String {
        let mut out = String::from("transitions = [\n");
        for t in &self.transitions {
            out.push_str(&format!("    ({}, {}, '{}'),\n", t.from.id(), t.to.id(), t.category));
        }
        out.push_str("]\n");

        let mut ids: Vec<u8> = self.accept_states.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        out.push_str(&format!("accept_states = {{{}}}\n", ids.join(", ")));
        out
    }
}

impl Default for AutomatonTable {
    fn default() -> Self {
        Self::standard()
    }
}
