//! Incremental keystroke matching over the known class set.
//!
//! Typed characters accumulate until they identify exactly one class name by
//! prefix. Prefix collisions (`bar` vs `bar1`) stay pending until either a
//! further character disambiguates or a trailing space terminates the name
//! early, shell-completion style.

use std::collections::BTreeSet;

/// Outcome of feeding one key to the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The accumulated input identifies exactly one class.
    Committed(String),
    /// Not decidable yet. This is a sentinel, not a label: callers must
    /// never store it.
    Pending,
}

impl MatchOutcome {
    /// Returns the committed class name, if any.
    #[must_use]
    pub fn committed(&self) -> Option<&str> {
        match self {
            Self::Committed(name) => Some(name),
            Self::Pending => None,
        }
    }
}

/// Matcher phase: whether typed input is currently waiting on more keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    /// No keys buffered since the last commit, discard, or reset.
    #[default]
    Idle,
    /// An ambiguous prefix is buffered; more keys may disambiguate.
    Accumulating,
}

/// Stateful incremental prefix matcher.
///
/// The buffer of key tokens is the only carried state. It is cleared on
/// commit, on an unambiguous zero-match (typed characters matching nothing
/// are abandoned, not retried), and on [`reset`](Self::reset); otherwise it
/// persists across calls. The matcher only ever borrows the class set, so
/// no copy is made per keystroke.
#[derive(Debug, Clone, Default)]
pub struct KeystrokeMatcher {
    /// Key tokens since the last commit or reset, in typed order. Tokens
    /// are appended as-is: event sources may deliver an empty token, which
    /// grows the buffer without changing the candidate text.
    buffer: Vec<String>,
    state: State,
}

impl KeystrokeMatcher {
    /// Creates an idle matcher with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The candidate text accumulated so far.
    #[must_use]
    pub fn pending_input(&self) -> String {
        self.buffer.concat()
    }

    /// Whether an ambiguous prefix is currently buffered.
    #[must_use]
    pub fn is_accumulating(&self) -> bool {
        self.state == State::Accumulating
    }

    /// Feeds one key to the matcher and decides against `classes`.
    ///
    /// The decision after appending `key`:
    /// - exactly one class starts with the candidate (trailing whitespace
    ///   ignored): commit it and clear the buffer;
    /// - no class starts with it: discard the buffer, stay undecided;
    /// - several classes start with it: keep accumulating, unless the
    ///   candidate ends in a space that terminates a complete name, in
    ///   which case the shortest matching class wins.
    ///
    /// The prefix test is case-sensitive and character-exact; there is no
    /// fuzzy matching.
    pub fn match_class(&mut self, key: &str, classes: &BTreeSet<String>) -> MatchOutcome {
        self.buffer.push(key.to_string());
        self.state = State::Accumulating;

        let candidate = self.buffer.concat();
        let trimmed = candidate.trim_end();

        let matches: Vec<&String> = classes
            .iter()
            .filter(|class| class.starts_with(trimmed))
            .collect();

        match matches.len() {
            0 => {
                // Nothing can ever match this prefix again; abandon it.
                self.clear();
                MatchOutcome::Pending
            }
            1 => {
                let class = matches[0].clone();
                self.clear();
                MatchOutcome::Committed(class)
            }
            _ => self.decide_ambiguous(&candidate, &matches),
        }
    }

    /// Ambiguous branch: two or more classes share the typed prefix.
    ///
    /// A trailing space asks to terminate the name early. Lengths are
    /// compared in characters, against the space-terminated candidate as
    /// typed; when the termination qualifies, the shortest match wins the
    /// tie-break.
    fn decide_ambiguous(&mut self, candidate: &str, matches: &[&String]) -> MatchOutcome {
        if !candidate.ends_with(' ') {
            return MatchOutcome::Pending;
        }

        let typed_len = candidate.chars().count();
        let terminates = matches
            .iter()
            .any(|class| class.trim_end().chars().count() == typed_len);

        if !terminates {
            // Still ambiguous even after the space; keep waiting.
            return MatchOutcome::Pending;
        }

        let shortest = matches
            .iter()
            .min_by_key(|class| class.chars().count())
            .map(|class| (*class).clone());

        match shortest {
            Some(class) => {
                self.clear();
                MatchOutcome::Committed(class)
            }
            None => MatchOutcome::Pending,
        }
    }

    /// Abandons the in-progress keystroke sequence unconditionally.
    pub fn reset(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.state = State::Idle;
    }
}
