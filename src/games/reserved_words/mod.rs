/// Reserved words quiz: type every keyword before the clock runs out
pub mod game;
pub mod renderer;

pub use game::{GameMessage, ReservedWordsGame};
pub use renderer::ReservedWordsRenderer;
