//! Game state for a single round.

use crate::gallows::{GallowsPart, visible_parts};
use crate::words::{WordList, WordListError, normalize_word};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of wrong guesses allowed per round.
pub const MAX_ATTEMPTS: u8 = 6;

/// Placeholder shown for letters that have not been guessed yet.
const HIDDEN: char = '_';

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Phase {
    /// Whether the round is over.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

/// The word to guess. Immutable for the lifetime of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord(String);

impl SecretWord {
    /// Validate and lower-case a word. Same rules as [`WordList::new`].
    pub fn new(word: &str) -> Result<Self, WordListError> {
        normalize_word(word, 0).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl std::fmt::Display for SecretWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Letters guessed so far, unique, in guess order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: Vec<char>,
}

impl GuessedLetters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Insert a letter. Returns false if it was already present.
    pub fn insert(&mut self, letter: char) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// Upper-case, comma separated, in guess order (e.g. `P, E, N`).
    pub fn display(&self) -> String {
        self.letters
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// State of one Hangman round.
#[derive(Debug, Clone)]
pub struct Game {
    secret: SecretWord,
    guessed: GuessedLetters,
    attempts: u8,
}

impl Game {
    /// Start a round with a word picked from `words`.
    pub fn start<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Self {
        // List entries are validated on construction.
        Self::from_secret(SecretWord(words.choose(rng).to_string()))
    }

    /// Start a round with a known secret word.
    pub fn with_word(word: &str) -> Result<Self, WordListError> {
        SecretWord::new(word).map(Self::from_secret)
    }

    fn from_secret(secret: SecretWord) -> Self {
        Self {
            secret,
            guessed: GuessedLetters::new(),
            attempts: MAX_ATTEMPTS,
        }
    }

    /// Replace this round with a fresh one.
    pub fn restart<R: Rng + ?Sized>(&mut self, words: &WordList, rng: &mut R) {
        *self = Self::start(words, rng);
    }

    /// Record a validated guess.
    ///
    /// A letter already guessed, or a character that is not a letter, leaves
    /// the state untouched.
    pub fn apply_guess(&mut self, letter: char) {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return;
        }
        if !self.guessed.insert(letter) {
            return;
        }
        if !self.secret.contains(letter) {
            self.attempts = self.attempts.saturating_sub(1);
        }
    }

    pub fn is_won(&self) -> bool {
        self.secret.letters().all(|c| self.guessed.contains(c))
    }

    pub fn is_lost(&self) -> bool {
        self.attempts == 0 && !self.is_won()
    }

    /// Win is checked before loss.
    pub fn phase(&self) -> Phase {
        if self.is_won() {
            Phase::Won
        } else if self.is_lost() {
            Phase::Lost
        } else {
            Phase::Playing
        }
    }

    /// The secret word with unguessed letters hidden, space separated.
    pub fn reveal_pattern(&self) -> String {
        self.secret
            .letters()
            .map(|c| if self.guessed.contains(c) { c } else { HIDDEN })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.attempts
    }

    pub fn wrong_guesses(&self) -> u8 {
        MAX_ATTEMPTS - self.attempts
    }

    pub fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Gallows parts to draw for the current number of wrong guesses.
    pub fn visible_parts(&self) -> Vec<GallowsPart> {
        visible_parts(self.attempts)
    }
}
