//! Event dispatch between the window and the game state.
//!
//! The presentation layer sends a [`GameEvent`] for every user action and
//! gets back an [`Outcome`] describing what to show. No drawing API is
//! involved, so the full game flow can be exercised without a display.

use crate::gallows::GallowsPart;
use crate::game::{Game, MAX_ATTEMPTS, Phase};
use crate::guess::parse_guess;
use crate::words::{WordList, WordListError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// User actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Raw text from the letter input.
    SubmitGuess(String),
    /// Start a new round.
    Restart,
}

/// Severity of a modal notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeKind {
    Warning,
    Info,
    Won,
    Lost,
}

/// A modal message for the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    fn won(word: &str) -> Self {
        Self {
            kind: NoticeKind::Won,
            title: "🎉 You Win!".to_string(),
            message: format!("The word was '{}'. Well done!", word),
        }
    }

    fn lost(word: &str) -> Self {
        Self {
            kind: NoticeKind::Lost,
            title: "💀 Game Over".to_string(),
            message: format!("You lost! The word was '{}'.", word),
        }
    }
}

/// Everything the window needs to draw the game screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Revealed word, e.g. `p _ n _ _ _ n`.
    pub word: String,
    /// e.g. `Attempts Left: 4`.
    pub status: String,
    /// e.g. `Guessed Letters: P, X, N`.
    pub guessed: String,
    pub parts: Vec<GallowsPart>,
    pub phase: Phase,
    pub attempts_remaining: u8,
    pub round: u32,
    pub input_enabled: bool,
    pub restart_enabled: bool,
}

impl GameView {
    fn of(game: &Game, round: u32) -> Self {
        let phase = game.phase();
        Self {
            word: game.reveal_pattern(),
            status: format!("Attempts Left: {}", game.attempts_remaining()),
            guessed: format!("Guessed Letters: {}", game.guessed().display()),
            parts: game.visible_parts(),
            phase,
            attempts_remaining: game.attempts_remaining(),
            round,
            input_enabled: !phase.is_terminal(),
            restart_enabled: phase.is_terminal(),
        }
    }
}

/// Result of dispatching one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub view: GameView,
    pub notice: Option<Notice>,
    /// Whether the letter input should be emptied.
    pub clear_input: bool,
    /// Whether any game state changed.
    pub changed: bool,
}

/// Owns the game state, the word list and the random source.
pub struct Controller<R = StdRng> {
    game: Game,
    words: WordList,
    rng: R,
    round: u32,
}

impl Controller<StdRng> {
    /// Controller seeded from OS entropy.
    pub fn from_entropy(words: WordList) -> Self {
        Self::new(words, StdRng::from_entropy())
    }

    /// Controller with a reproducible word sequence.
    pub fn seeded(words: WordList, seed: u64) -> Self {
        Self::new(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Controller<R> {
    /// Create a controller and start the first round.
    pub fn new(words: WordList, mut rng: R) -> Self {
        let game = Game::start(&words, &mut rng);
        log::info!("Round 1 started ({} letters)", game.secret().as_str().len());
        Self {
            game,
            words,
            rng,
            round: 1,
        }
    }

    /// Replace the current round with one using a known word.
    pub fn with_word(mut self, word: &str) -> Result<Self, WordListError> {
        self.game = Game::with_word(word)?;
        log::info!(
            "Round {} restarted with a fixed word ({} letters)",
            self.round,
            self.game.secret().as_str().len()
        );
        Ok(self)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    pub fn view(&self) -> GameView {
        GameView::of(&self.game, self.round)
    }

    /// Apply one event and describe the result.
    pub fn dispatch(&mut self, event: GameEvent) -> Outcome {
        match event {
            GameEvent::SubmitGuess(raw) => self.submit_guess(&raw),
            GameEvent::Restart => self.restart(),
        }
    }

    fn submit_guess(&mut self, raw: &str) -> Outcome {
        if self.phase().is_terminal() {
            log::debug!("Ignoring guess {:?}: round {} is over", raw, self.round);
            return self.unchanged(None, false);
        }

        let letter = match parse_guess(raw, self.game.guessed()) {
            Ok(letter) => letter,
            Err(err) => {
                log::debug!("Rejected guess {:?}: {:?}", raw, err);
                let notice = Notice {
                    kind: err.kind(),
                    title: err.title().to_string(),
                    message: err.to_string(),
                };
                return self.unchanged(Some(notice), !err.is_malformed());
            }
        };

        let before = self.game.attempts_remaining();
        self.game.apply_guess(letter);
        let hit = self.game.attempts_remaining() == before;
        log::debug!(
            "Guess '{}' {} ({} of {} attempts left)",
            letter,
            if hit { "hit" } else { "missed" },
            self.game.attempts_remaining(),
            MAX_ATTEMPTS
        );

        let notice = if self.game.is_won() {
            log::info!("Round {} won: {}", self.round, self.game.secret());
            Some(Notice::won(self.game.secret().as_str()))
        } else if self.game.is_lost() {
            log::info!("Round {} lost: {}", self.round, self.game.secret());
            Some(Notice::lost(self.game.secret().as_str()))
        } else {
            None
        };

        Outcome {
            view: self.view(),
            notice,
            clear_input: true,
            changed: true,
        }
    }

    fn restart(&mut self) -> Outcome {
        if !self.phase().is_terminal() {
            log::debug!("Ignoring restart: round {} still in play", self.round);
            return self.unchanged(None, false);
        }

        self.game.restart(&self.words, &mut self.rng);
        self.round += 1;
        log::info!(
            "Round {} started ({} letters)",
            self.round,
            self.game.secret().as_str().len()
        );

        Outcome {
            view: self.view(),
            notice: None,
            clear_input: true,
            changed: true,
        }
    }

    fn unchanged(&self, notice: Option<Notice>, clear_input: bool) -> Outcome {
        Outcome {
            view: self.view(),
            notice,
            clear_input,
            changed: false,
        }
    }
}
