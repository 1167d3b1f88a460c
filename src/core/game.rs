//! Screen-level game interface driven by the [`Engine`](crate::core::engine::Engine)

use std::time::Duration;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc::UnboundedSender;

/// Handle a game uses to queue messages for itself.
///
/// Anything sent here is delivered back through [`Game::handle_message`]
/// on a later turn of the engine loop.
pub struct Context<M> {
    pub(crate) tx: UnboundedSender<M>,
}

impl<M> Context<M> {
    pub fn new(tx: UnboundedSender<M>) -> Self {
        Self { tx }
    }

    pub fn defer(&self, msg: M) {
        // The engine owns the receiver for as long as the game is alive.
        let _ = self.tx.send(msg);
    }
}

pub trait Game {
    type Message;

    /// How often `on_tick` runs
    fn tick_rate(&self) -> Duration;

    fn on_tick(&mut self, ctx: &Context<Self::Message>);

    fn handle_input(&mut self, event: KeyEvent, ctx: &Context<Self::Message>);

    fn handle_message(&mut self, msg: Self::Message, ctx: &Context<Self::Message>);

    fn render(&self, frame: &mut ratatui::Frame);
}
