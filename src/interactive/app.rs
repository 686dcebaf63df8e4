//! TUI application state and logic

use crate::commands::PlaySettings;
use crate::core::{
    CategoryFilter, Difficulty, DifficultyFilter, GuessOutcome, HangmanGame, Statistics,
};
use crate::wordlists::WordDictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a WordDictionary,
    pub game: Option<HangmanGame<'a>>,
    pub settings: PlaySettings,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Menu,
    Playing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a WordDictionary, rng: StdRng, settings: PlaySettings) -> Self {
        Self {
            dictionary,
            game: None,
            settings,
            input_mode: InputMode::Menu,
            messages: vec![Message {
                text: "Welcome! Press 'n' to start, 'c'/'d' to change category/difficulty."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    pub fn new_game(&mut self) {
        match HangmanGame::start(
            self.dictionary,
            self.settings.difficulty,
            &self.settings.category,
            &mut self.rng,
        ) {
            Ok(game) => {
                let message = format!(
                    "New word: {} letters, {} attempts. Type letters to guess.",
                    game.current_word().length(),
                    game.remaining_attempts()
                );
                self.game = Some(game);
                self.input_mode = InputMode::Playing;
                self.add_message(&message, MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn guess(&mut self, letter: char) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        let (text, style) = match game.guess_letter(letter) {
            Ok(GuessOutcome::Hit { occurrences }) => (
                format!(
                    "'{}' appears {occurrences} time{}",
                    letter.to_lowercase(),
                    if occurrences == 1 { "" } else { "s" }
                ),
                MessageStyle::Success,
            ),
            Ok(GuessOutcome::Miss) => (
                format!("No '{}' in the word", letter.to_lowercase()),
                MessageStyle::Error,
            ),
            Err(e) => (e.to_string(), MessageStyle::Error),
        };
        let over = game.is_game_over();

        self.add_message(&text, style);
        if over {
            self.finish_round();
        }
    }

    pub fn use_hint(&mut self, index: usize) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match game.use_hint(index) {
            Ok(hint) => {
                let text = format!("Hint {}: {hint}", index + 1);
                self.add_message(&text, MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn give_up(&mut self) {
        if self.input_mode == InputMode::Playing {
            self.add_message("You gave up.", MessageStyle::Error);
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let won = game.is_word_guessed();
        let text = if won {
            format!("🎉 You won! The word was '{}'.", game.current_word())
        } else {
            format!("You lost. The word was '{}'.", game.current_word())
        };

        self.stats.record(won);
        self.input_mode = InputMode::Finished;
        self.add_message(
            &text,
            if won {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            },
        );
        self.add_message(
            "Press 'n' for a new game, 'm' for the menu or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    pub fn back_to_menu(&mut self) {
        self.game = None;
        self.settings = PlaySettings::default();
        self.input_mode = InputMode::Menu;
    }

    /// Step to the next category, wrapping through `Random`
    pub fn cycle_category(&mut self) {
        let mut options = vec![CategoryFilter::Random];
        options.extend(
            self.dictionary
                .sorted_categories()
                .into_iter()
                .map(CategoryFilter::named),
        );
        self.settings.category = next_option(&options, &self.settings.category);
    }

    /// Step to the next difficulty, wrapping through `Random`
    pub fn cycle_difficulty(&mut self) {
        let mut options = vec![DifficultyFilter::Random];
        options.extend(Difficulty::ALL.map(DifficultyFilter::Exact));
        self.settings.difficulty = next_option(&options, &self.settings.difficulty);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Menu => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('c') => self.cycle_category(),
                KeyCode::Char('d') => self.cycle_difficulty(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.give_up(),
                KeyCode::Char('1') => self.use_hint(0),
                KeyCode::Char('2') => self.use_hint(1),
                KeyCode::Char(c) if c.is_alphabetic() => self.guess(c),
                _ => {}
            },
            InputMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('m') => self.back_to_menu(),
                _ => {}
            },
        }
    }
}

fn next_option<T: Clone + PartialEq>(options: &[T], current: &T) -> T {
    let next = options
        .iter()
        .position(|option| option == current)
        .map_or(0, |i| (i + 1) % options.len());
    options[next].clone()
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    info!(words = app.dictionary.len(), "tui started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
