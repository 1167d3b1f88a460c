use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use crate::config::GameConfig;
use crate::core::error::GameError;
use crate::core::session::{Outcome, Session, Submission};
use crate::games::reserved_words::renderer::ReservedWordsRenderer;
use crate::{Context, Game};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameMessage {
    /// Re-read the score for the header
    Refresh,
}

pub struct ReservedWordsGame {
    pub(crate) session: Session,
    pub(crate) input: String,
    pub(crate) feedback: String,
    /// Score shown in the header; lags the bank until a `Refresh` lands
    pub(crate) shown_score: usize,
}

impl ReservedWordsGame {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let mut session = Session::new(config)?;
        session.start();
        Ok(Self {
            session,
            input: String::new(),
            feedback: "Type a reserved word and press Enter".into(),
            shown_score: 0,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn check_input(&mut self, ctx: &Context<GameMessage>) {
        let guess = std::mem::take(&mut self.input);
        if guess.is_empty() {
            return;
        }

        self.feedback = match self.session.submit(&guess) {
            Submission::Scored => {
                ctx.defer(GameMessage::Refresh);
                match self.session.outcome() {
                    Some(Outcome::Victory) => "You found every word!".into(),
                    _ => format!("'{}' scored!", guess),
                }
            }
            Submission::AlreadyScored => format!("'{}' is already on the board", guess),
            Submission::Missed => format!("'{}' is not on the list", guess),
            Submission::Ignored => return,
        };
    }
}

impl Game for ReservedWordsGame {
    type Message = GameMessage;

    fn tick_rate(&self) -> Duration {
        Duration::from_secs(1)
    }

    fn on_tick(&mut self, _ctx: &Context<Self::Message>) {
        if let Some(Outcome::Defeat) = self.session.tick() {
            self.input.clear();
            self.feedback = "Time is up!".into();
        }
    }

    fn handle_input(&mut self, event: KeyEvent, ctx: &Context<Self::Message>) {
        if self.session.is_over() {
            return;
        }

        match event.code {
            KeyCode::Char(c) if !event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.input.push(c);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.check_input(ctx),
            _ => {}
        }
    }

    fn handle_message(&mut self, msg: Self::Message, _ctx: &Context<Self::Message>) {
        match msg {
            GameMessage::Refresh => self.shown_score = self.session.score(),
        }
    }

    fn render(&self, frame: &mut Frame) {
        ReservedWordsRenderer::render(frame, self);
    }
}
