//! Solver engine: opener table, guess selection, and the solve loop
//!
//! A `Solver` borrows the process-wide ranked list and runs independent
//! sessions against it. Each session owns its constraints, guess history,
//! and scan cursor; nothing is shared mutably between sessions.

use super::constraints::Constraints;
use super::frequency::RankedList;
use super::strategy::ScanPolicy;
use super::SolveError;
use crate::core::{Feedback, Word};

/// Fixed opening sequence, played in order before any ranked-list scan
///
/// Chosen offline for combined letter coverage; they are issued regardless
/// of feedback and are never tested against the constraints.
pub const OPENING_GUESSES: [&str; 3] = ["perch", "mangy", "doubt"];

/// Frequency-heuristic solver over a pre-ranked dictionary
pub struct Solver<'a> {
    ranked: &'a RankedList,
    openers: Vec<Word>,
    policy: ScanPolicy,
}

/// State owned by one solving session
#[derive(Debug, Clone)]
pub struct Session {
    constraints: Constraints,
    history: Vec<(Word, Feedback)>,
    cursor: usize,
}

/// A completed (solved) session
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub target: Word,
    pub history: Vec<(Word, Feedback)>,
}

impl SolveOutcome {
    /// Number of guesses the session took
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.history.len()
    }
}

impl Session {
    fn new() -> Self {
        Self {
            constraints: Constraints::new(),
            history: Vec::new(),
            cursor: 0,
        }
    }

    /// Guesses issued so far
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.history.len()
    }

    /// The (guess, feedback) pairs issued so far, in order
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// The accumulated constraints
    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Fold a guess and its feedback into the session
    ///
    /// # Errors
    /// Propagates `SolveError::InconsistentConstraint` from the tracker.
    pub fn record(&mut self, guess: Word, feedback: &Feedback) -> Result<(), SolveError> {
        self.constraints.update(&guess, feedback)?;
        self.history.push((guess, *feedback));
        Ok(())
    }

    fn already_guessed(&self, word: &Word) -> bool {
        self.history.iter().any(|(guess, _)| guess == word)
    }
}

impl<'a> Solver<'a> {
    /// Create a solver over a ranked list with the given scan policy
    ///
    /// # Panics
    /// Will not panic - the opening guesses are statically valid words.
    #[must_use]
    pub fn new(ranked: &'a RankedList, policy: ScanPolicy) -> Self {
        let openers = OPENING_GUESSES
            .iter()
            .map(|text| Word::new(*text).expect("opening guesses are valid words"))
            .collect();

        Self {
            ranked,
            openers,
            policy,
        }
    }

    /// Start a fresh session
    #[must_use]
    pub fn begin(&self) -> Session {
        Session::new()
    }

    /// Select the next guess for a session
    ///
    /// The first guesses come straight from the opener table. After that the
    /// ranked list is scanned for the first word consistent with the
    /// session's constraints, according to the configured policy.
    ///
    /// # Errors
    /// Returns `SolveError::NoViableCandidate` when the scan exhausts the
    /// ranked list.
    pub fn next_guess(&self, session: &mut Session) -> Result<Word, SolveError> {
        let turn = session.guesses();
        if let Some(opener) = self.openers.get(turn) {
            return Ok(opener.clone());
        }

        match self.policy {
            ScanPolicy::Monotonic => {
                // The cursor advances past every word examined and never
                // rewinds within the session.
                while let Some(entry) = self.ranked.get(session.cursor) {
                    session.cursor += 1;
                    if session.constraints.is_viable(&entry.word) {
                        return Ok(entry.word.clone());
                    }
                }
                Err(SolveError::NoViableCandidate { attempted: turn })
            }
            ScanPolicy::Rescan => {
                for entry in self.ranked {
                    if session.already_guessed(&entry.word) {
                        continue;
                    }
                    if session.constraints.is_viable(&entry.word) {
                        return Ok(entry.word.clone());
                    }
                }
                Err(SolveError::NoViableCandidate { attempted: turn })
            }
        }
    }

    /// Count ranked words consistent with the session's constraints
    #[must_use]
    pub fn count_viable(&self, session: &Session) -> usize {
        self.ranked
            .iter()
            .filter(|entry| session.constraints.is_viable(&entry.word))
            .count()
    }

    /// Run a full session against a hidden target
    ///
    /// Loops until the feedback is all-correct. There is no guess cap here;
    /// classifying long sessions as failures is the evaluation harness's
    /// concern.
    ///
    /// # Errors
    /// Returns `SolveError::NoViableCandidate` if the ranked list runs out,
    /// or `SolveError::InconsistentConstraint` on an internal tracking bug.
    pub fn solve(&self, target: &Word) -> Result<SolveOutcome, SolveError> {
        let mut session = self.begin();

        loop {
            let guess = self.next_guess(&mut session)?;
            let feedback = Feedback::evaluate(target, &guess);
            session.record(guess, &feedback)?;

            if feedback.is_solved() {
                return Ok(SolveOutcome {
                    target: target.clone(),
                    history: session.history,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::frequency::FrequencyTable;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    fn ranked(words: &[Word]) -> RankedList {
        let table = FrequencyTable::build(words);
        RankedList::rank(words, &table)
    }

    #[test]
    fn openers_play_in_order_regardless_of_feedback() {
        let words = dictionary(&["slate", "crane", "perch", "mangy", "doubt"]);
        let list = ranked(&words);
        let solver = Solver::new(&list, ScanPolicy::Monotonic);

        let target = word("slate");
        let mut session = solver.begin();

        for expected in OPENING_GUESSES {
            let guess = solver.next_guess(&mut session).unwrap();
            assert_eq!(guess.text(), expected);
            let feedback = Feedback::evaluate(&target, &guess);
            session.record(guess, &feedback).unwrap();
        }
    }

    #[test]
    fn first_guess_solves_perch_in_one() {
        let words = dictionary(&["perch", "mangy", "doubt", "slate"]);
        let list = ranked(&words);
        let solver = Solver::new(&list, ScanPolicy::Monotonic);

        let outcome = solver.solve(&word("perch")).unwrap();
        assert_eq!(outcome.guesses(), 1);
        assert_eq!(outcome.history[0].0.text(), "perch");
        assert!(outcome.history[0].1.is_solved());
    }

    #[test]
    fn ranked_scan_respects_constraints() {
        // Target shares nothing with the openers, so guess four must come
        // from the ranked list and be consistent with all feedback so far.
        let words = dictionary(&["perch", "mangy", "doubt", "skill", "swill"]);
        let list = ranked(&words);
        let solver = Solver::new(&list, ScanPolicy::Monotonic);

        let target = word("skill");
        let outcome = solver.solve(&target).unwrap();

        assert!(outcome.guesses() >= 4);
        for (guess, _) in &outcome.history[3..] {
            // No scanned guess may contradict the opener feedback: none of
            // the dead opener letters can reappear.
            for dead in [b'p', b'r', b'c', b'h', b'a', b'n', b'g', b'y'] {
                assert_eq!(guess.count_of(dead), 0, "dead letter in {guess}");
            }
        }
        assert_eq!(outcome.history.last().unwrap().0, target);
    }

    #[test]
    fn monotonic_cursor_never_rewinds() {
        let words = dictionary(&["perch", "mangy", "doubt", "skill", "swill", "still"]);
        let list = ranked(&words);
        let solver = Solver::new(&list, ScanPolicy::Monotonic);

        let mut session = solver.begin();
        let target = word("still");

        // Play through the openers.
        for _ in 0..3 {
            let guess = solver.next_guess(&mut session).unwrap();
            let feedback = Feedback::evaluate(&target, &guess);
            session.record(guess, &feedback).unwrap();
        }

        let mut last_cursor = session.cursor;
        while session.history.last().is_none_or(|(_, f)| !f.is_solved()) {
            let guess = solver.next_guess(&mut session).unwrap();
            assert!(session.cursor >= last_cursor);
            last_cursor = session.cursor;
            let feedback = Feedback::evaluate(&target, &guess);
            session.record(guess, &feedback).unwrap();
        }
    }

    #[test]
    fn rescan_policy_skips_already_guessed_words() {
        // "rates" vs target "stare" yields five misplaced hints and stays
        // viable; rescan must not loop on it.
        let words = dictionary(&["perch", "mangy", "doubt", "rates", "stare"]);
        let list = ranked(&words);
        let solver = Solver::new(&list, ScanPolicy::Rescan);

        let outcome = solver.solve(&word("stare")).unwrap();
        let texts: Vec<&str> = outcome.history.iter().map(|(g, _)| g.text()).collect();

        let unique: std::collections::HashSet<&&str> = texts.iter().collect();
        assert_eq!(unique.len(), texts.len(), "repeated guess in {texts:?}");
        assert_eq!(*texts.last().unwrap(), "stare");
    }

    #[test]
    fn exhausted_list_returns_no_viable_candidate() {
        // Dictionary too small to ever produce the target's letters.
        let words = dictionary(&["perch", "mangy", "doubt"]);
        let list = ranked(&words);
        let solver = Solver::new(&list, ScanPolicy::Monotonic);

        let result = solver.solve(&word("fuzzy"));
        assert!(matches!(
            result,
            Err(SolveError::NoViableCandidate { .. })
        ));
    }

    #[test]
    fn count_viable_shrinks_as_evidence_accumulates() {
        let words = dictionary(&["perch", "mangy", "doubt", "skill", "swill", "still"]);
        let list = ranked(&words);
        let solver = Solver::new(&list, ScanPolicy::Monotonic);

        let target = word("skill");
        let mut session = solver.begin();
        let before = solver.count_viable(&session);
        assert_eq!(before, words.len());

        let guess = solver.next_guess(&mut session).unwrap();
        let feedback = Feedback::evaluate(&target, &guess);
        session.record(guess, &feedback).unwrap();

        assert!(solver.count_viable(&session) <= before);
    }

    #[test]
    fn sessions_are_independent() {
        let words = dictionary(&["perch", "mangy", "doubt", "skill", "swill"]);
        let list = ranked(&words);
        let solver = Solver::new(&list, ScanPolicy::Monotonic);

        let first = solver.solve(&word("skill")).unwrap();
        let second = solver.solve(&word("skill")).unwrap();

        let a: Vec<&str> = first.history.iter().map(|(g, _)| g.text()).collect();
        let b: Vec<&str> = second.history.iter().map(|(g, _)| g.text()).collect();
        assert_eq!(a, b);
    }
}
