pub mod core {
	pub mod clock;
	pub mod engine;
	pub mod error;
	pub mod game;
	pub mod session;
	pub mod word_bank;
}

pub mod cli;
pub mod config;
pub mod games;

// Re-export for convenience
pub use crate::core::game::{Context, Game};
pub use crate::core::error::GameError;
