//! One play-through: the word bank, the countdown and the final outcome

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::clock::{ClockHandle, GameClock};
use crate::core::error::GameError;
use crate::core::word_bank::WordBank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Result of submitting one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Scored,
    AlreadyScored,
    Missed,
    /// The session is over and no longer takes input
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClockEvent {
    Tick(u32),
    Expired,
}

pub struct Session {
    bank: WordBank,
    clock: GameClock,
    duration_secs: u32,
    remaining: u32,
    handle: Option<ClockHandle>,
    outcome: Option<Outcome>,
    clock_tx: UnboundedSender<ClockEvent>,
    clock_rx: UnboundedReceiver<ClockEvent>,
}

impl Session {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        // An empty title can never be typed, so the game could never be won.
        if let Some(idx) = config.words.iter().position(|w| w.is_empty()) {
            return Err(GameError::InvalidConfiguration(format!("word #{} is empty", idx + 1)));
        }
        let bank = WordBank::new(config.words.iter().cloned())?;
        let (clock_tx, clock_rx) = mpsc::unbounded_channel();
        Ok(Self {
            bank,
            clock: GameClock::new(),
            duration_secs: config.duration_secs,
            remaining: config.duration_secs,
            handle: None,
            outcome: None,
            clock_tx,
            clock_rx,
        })
    }

    pub fn start(&mut self) {
        let ticks = self.clock_tx.clone();
        let expiry = self.clock_tx.clone();
        self.remaining = self.duration_secs;
        self.handle = Some(self.clock.start(
            self.duration_secs,
            move |remaining| {
                let _ = ticks.send(ClockEvent::Tick(remaining));
            },
            move || {
                let _ = expiry.send(ClockEvent::Expired);
            },
        ));
        info!(words = self.bank.total(), duration_secs = self.duration_secs, "session started");
    }

    /// Advance the clock by one second. Returns the outcome if this tick ended the session.
    pub fn tick(&mut self) -> Option<Outcome> {
        let handle = self.handle?;
        if !self.clock.tick(handle) {
            return None;
        }

        let mut ended = None;
        while let Ok(event) = self.clock_rx.try_recv() {
            match event {
                ClockEvent::Tick(remaining) => {
                    debug!(remaining, "tick");
                    self.remaining = remaining;
                }
                ClockEvent::Expired => {
                    if self.outcome.is_none() {
                        info!(score = self.bank.score(), total = self.bank.total(), "time is up");
                        self.outcome = Some(Outcome::Defeat);
                        ended = self.outcome;
                    }
                }
            }
        }
        ended
    }

    pub fn submit(&mut self, guess: &str) -> Submission {
        if self.outcome.is_some() {
            return Submission::Ignored;
        }

        let before = self.bank.score();
        if !self.bank.submit(guess) {
            debug!(guess, "not in the word list");
            return Submission::Missed;
        }
        if self.bank.score() == before {
            return Submission::AlreadyScored;
        }

        info!(guess, score = self.bank.score(), total = self.bank.total(), "scored");
        if self.bank.is_complete() {
            self.clock.stop();
            self.outcome = Some(Outcome::Victory);
            info!(remaining = self.remaining, "all words found");
        }
        Submission::Scored
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    pub fn score(&self) -> usize {
        self.bank.score()
    }

    pub fn total(&self) -> usize {
        self.bank.total()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }
}
