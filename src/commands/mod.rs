//! Command implementations

pub mod input;
pub mod list;
pub mod simple;

pub use input::{GameInput, InputError, parse_game_input, parse_menu_choice};
pub use list::list_words;
pub use simple::{ConsoleGame, PlaySettings, run_simple};
