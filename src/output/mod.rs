//! Terminal output formatting
//!
//! Gallows art, menus and result screens for the console game.

pub mod display;
pub mod formatters;

pub use display::{
    clear_screen, render_error, render_game, render_game_menu, render_game_result,
    render_main_menu, render_option_menu, render_post_game_menu, render_word_card,
};
