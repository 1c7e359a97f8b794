//! Candidate words for the secret word.

use rand::Rng;
use thiserror::Error;

/// The built-in word list.
pub const DEFAULT_WORDS: &[&str] = &[
    "elephant",
    "giraffe",
    "kangaroo",
    "dolphin",
    "penguin",
    "alligator",
    "chimpanzee",
    "rhinoceros",
];

/// Word list construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("Word list is empty")]
    Empty,
    #[error("Word at position {0} is empty")]
    EmptyWord(usize),
    #[error("Word '{0}' contains a character that is not a letter")]
    NotAlphabetic(String),
}

/// A non-empty list of lowercase ASCII words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a word list, lower-casing every entry.
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Vec::new();
        for (index, word) in words.into_iter().enumerate() {
            list.push(normalize_word(word.as_ref(), index)?);
        }

        if list.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words: list })
    }

    /// Pick one word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.gen_range(0..self.words.len());
        &self.words[index]
    }

    /// Number of candidate words (always at least one).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Lower-case `word` and check it is a non-empty run of ASCII letters.
///
/// `index` is the word's position, reported when it is empty.
pub(crate) fn normalize_word(word: &str, index: usize) -> Result<String, WordListError> {
    let word = word.to_lowercase();
    if word.is_empty() {
        return Err(WordListError::EmptyWord(index));
    }
    if !word.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(WordListError::NotAlphabetic(word));
    }
    Ok(word)
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}
