//! Validation of raw guess input.

use crate::controller::NoticeKind;
use crate::game::GuessedLetters;
use thiserror::Error;

/// Why a raw guess was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a single alphabet letter.")]
    Empty,
    #[error("Please enter a single alphabet letter.")]
    TooLong(usize),
    #[error("Please enter a single alphabet letter.")]
    NotALetter(char),
    #[error("You already guessed '{0}'.")]
    AlreadyGuessed(char),
}

impl GuessError {
    /// Malformed input is a warning, a repeat is informational.
    pub fn kind(&self) -> NoticeKind {
        match self {
            GuessError::AlreadyGuessed(_) => NoticeKind::Info,
            _ => NoticeKind::Warning,
        }
    }

    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            GuessError::AlreadyGuessed(_) => "Already Guessed",
            _ => "Invalid Input",
        }
    }

    pub fn is_malformed(&self) -> bool {
        !matches!(self, GuessError::AlreadyGuessed(_))
    }
}

/// Turn raw text into a lowercase letter that has not been guessed yet.
///
/// Whitespace is not trimmed.
pub fn parse_guess(raw: &str, guessed: &GuessedLetters) -> Result<char, GuessError> {
    let lowered = raw.to_lowercase();
    let mut chars = lowered.chars();

    let letter = chars.next().ok_or(GuessError::Empty)?;
    let count = 1 + chars.count();
    if count > 1 {
        return Err(GuessError::TooLong(count));
    }
    if !letter.is_ascii_lowercase() {
        return Err(GuessError::NotALetter(letter));
    }
    if guessed.contains(letter) {
        return Err(GuessError::AlreadyGuessed(letter));
    }

    Ok(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_single_letter() {
        let guessed = GuessedLetters::new();
        assert_eq!(parse_guess("a", &guessed), Ok('a'));
        assert_eq!(parse_guess("Q", &guessed), Ok('q'));
    }

    #[test]
    fn test_rejects_malformed() {
        let guessed = GuessedLetters::new();
        assert_eq!(parse_guess("", &guessed), Err(GuessError::Empty));
        assert_eq!(parse_guess("ab", &guessed), Err(GuessError::TooLong(2)));
        assert_eq!(parse_guess("7", &guessed), Err(GuessError::NotALetter('7')));
        assert_eq!(parse_guess(" ", &guessed), Err(GuessError::NotALetter(' ')));
        assert_eq!(parse_guess("a ", &guessed), Err(GuessError::TooLong(2)));
        assert_eq!(parse_guess("é", &guessed), Err(GuessError::NotALetter('é')));
    }

    #[test]
    fn test_rejects_repeat() {
        let mut guessed = GuessedLetters::new();
        guessed.insert('a');
        assert_eq!(parse_guess("a", &guessed), Err(GuessError::AlreadyGuessed('a')));
        assert_eq!(parse_guess("A", &guessed), Err(GuessError::AlreadyGuessed('a')));
    }

    #[test]
    fn test_error_severity_and_text() {
        assert_eq!(GuessError::Empty.kind(), NoticeKind::Warning);
        assert_eq!(GuessError::TooLong(3).title(), "Invalid Input");
        assert_eq!(
            GuessError::NotALetter('7').to_string(),
            "Please enter a single alphabet letter."
        );

        let repeat = GuessError::AlreadyGuessed('e');
        assert_eq!(repeat.kind(), NoticeKind::Info);
        assert_eq!(repeat.title(), "Already Guessed");
        assert_eq!(repeat.to_string(), "You already guessed 'e'.");
        assert!(!repeat.is_malformed());
    }
}
