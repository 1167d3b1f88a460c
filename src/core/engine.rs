use crate::{Context, Game};
use anyhow::{Context as _, Result};
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Run until Esc. Hands the game back so the caller can report on it.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        let (outbox_tx, mut outbox_rx) = tokio::sync::mpsc::unbounded_channel::<G::Message>();
        let ctx = Context::new(outbox_tx);
        let mut events = EventStream::new();

        let period = self.game.tick_rate();
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            terminal
                .draw(|f| self.game.render(f))
                .context("failed to draw frame")?;

            tokio::select! {
                // 1. INPUT
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Esc {
                                debug!("quit requested");
                                break;
                            }
                            self.game.handle_input(key, &ctx);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            warn!(error = ?e, "terminal event error");
                            return Err(e).context("failed to read terminal events");
                        }
                        None => break,
                    }
                }

                // 2. DEFERRED: messages the game queued for itself
                Some(msg) = outbox_rx.recv() => {
                    self.game.handle_message(msg, &ctx);
                }

                // 3. TICK
                _ = ticker.tick() => {
                    self.game.on_tick(&ctx);
                }
            }
        }

        Ok(self.game)
    }
}
