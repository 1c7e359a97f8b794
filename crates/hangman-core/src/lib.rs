//! Hangman Core Library
//!
//! Platform-agnostic game state, input validation and gallows geometry for
//! the Hangman game. Nothing in this crate touches a window or a GPU.

pub mod controller;
pub mod gallows;
pub mod game;
pub mod guess;
pub mod words;

pub use controller::{Controller, GameEvent, GameView, Notice, NoticeKind, Outcome};
pub use gallows::{CANVAS_SIZE, GallowsPart, ScaffoldPiece, visible_parts};
pub use game::{Game, GuessedLetters, MAX_ATTEMPTS, Phase, SecretWord};
pub use guess::{GuessError, parse_guess};
pub use words::{DEFAULT_WORDS, WordList, WordListError};
