//! Screen implementations.

mod in_game;
mod name_entry;

pub use in_game::InGameScreen;
pub use name_entry::NameEntryScreen;
