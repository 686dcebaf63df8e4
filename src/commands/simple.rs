//! Console game loop
//!
//! Text menus driven by line input: pick a category and difficulty, play a
//! round, then return to the menu or exit.

use super::input::{GameInput, parse_game_input, parse_menu_choice};
use crate::core::{CategoryFilter, Difficulty, DifficultyFilter, HangmanGame, Statistics};
use crate::output::{
    clear_screen, render_error, render_game, render_game_menu, render_game_result,
    render_main_menu, render_option_menu, render_post_game_menu,
};
use crate::wordlists::WordDictionary;
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Filters a console session starts with
#[derive(Debug, Clone, Default)]
pub struct PlaySettings {
    pub difficulty: DifficultyFilter,
    pub category: CategoryFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuSelection {
    Random,
    Index(usize),
    EndOfInput,
}

/// Console session over arbitrary input and output streams
pub struct ConsoleGame<'a, R, W, G> {
    dictionary: &'a WordDictionary,
    input: R,
    output: W,
    rng: G,
    settings: PlaySettings,
    pending_error: Option<String>,
    stats: Statistics,
}

impl<'a, R, W, G> ConsoleGame<'a, R, W, G>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    pub fn new(
        dictionary: &'a WordDictionary,
        input: R,
        output: W,
        rng: G,
        settings: PlaySettings,
    ) -> Self {
        Self {
            dictionary,
            input,
            output,
            rng,
            settings,
            pending_error: None,
            stats: Statistics::default(),
        }
    }

    /// Run until the player exits or input ends
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(mut self) -> Result<Statistics> {
        info!(words = self.dictionary.len(), "console game started");

        loop {
            self.refresh_screen()?;
            render_main_menu(
                &mut self.output,
                &self.settings.category,
                self.settings.difficulty,
            )?;

            let Some(line) = self.prompt("Enter a menu number: ")? else {
                break;
            };

            let flow = match parse_menu_choice(&line, 1..=4) {
                Ok(1) => self.play_round()?,
                Ok(2) => self.choose_category()?,
                Ok(3) => self.choose_difficulty()?,
                Ok(_) => Flow::Exit,
                Err(e) => {
                    self.pending_error = Some(e.to_string());
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        Ok(self.stats)
    }

    fn play_round(&mut self) -> Result<Flow> {
        let dictionary = self.dictionary;
        let mut game = match HangmanGame::start(
            dictionary,
            self.settings.difficulty,
            &self.settings.category,
            &mut self.rng,
        ) {
            Ok(game) => game,
            Err(e) => {
                self.pending_error = Some(e.to_string());
                return Ok(Flow::Continue);
            }
        };

        while !game.is_game_over() {
            self.refresh_screen()?;
            render_game(&mut self.output, &game)?;
            render_game_menu(&mut self.output, &game)?;

            let Some(line) = self.prompt("Enter a menu number or a letter: ")? else {
                return Ok(Flow::Exit);
            };

            self.pending_error = match parse_game_input(&line) {
                Ok(GameInput::Hint(index)) => game.use_hint(index).err().map(|e| e.to_string()),
                Ok(GameInput::Letter(letter)) => {
                    game.guess_letter(letter).err().map(|e| e.to_string())
                }
                Ok(GameInput::GiveUp) => break,
                Ok(GameInput::Quit) => return Ok(Flow::Exit),
                Err(e) => Some(e.to_string()),
            };
        }

        let won = game.is_word_guessed();
        self.stats.record(won);
        debug!(word = game.current_word().text(), won, "round finished");

        self.refresh_screen()?;
        render_game(&mut self.output, &game)?;
        render_game_result(&mut self.output, &game)?;
        writeln!(
            self.output,
            "Games: {} | Won: {} | Win rate: {:.0}%",
            self.stats.total_games,
            self.stats.games_won,
            self.stats.win_rate()
        )?;

        self.post_game()
    }

    fn post_game(&mut self) -> Result<Flow> {
        loop {
            render_post_game_menu(&mut self.output)?;
            let Some(line) = self.prompt("Enter a menu number: ")? else {
                return Ok(Flow::Exit);
            };

            match parse_menu_choice(&line, 1..=2) {
                Ok(1) => {
                    self.settings = PlaySettings::default();
                    return Ok(Flow::Continue);
                }
                Ok(_) => return Ok(Flow::Exit),
                Err(e) => render_error(&mut self.output, Some(&e.to_string()))?,
            }
        }
    }

    fn choose_category(&mut self) -> Result<Flow> {
        let categories: Vec<String> = self
            .dictionary
            .sorted_categories()
            .into_iter()
            .map(str::to_string)
            .collect();

        match self.choose_option("category", &categories)? {
            MenuSelection::Random => self.settings.category = CategoryFilter::Random,
            MenuSelection::Index(i) => {
                self.settings.category = CategoryFilter::named(categories[i].clone());
            }
            MenuSelection::EndOfInput => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn choose_difficulty(&mut self) -> Result<Flow> {
        let labels: Vec<String> = Difficulty::ALL.iter().map(ToString::to_string).collect();

        match self.choose_option("difficulty", &labels)? {
            MenuSelection::Random => self.settings.difficulty = DifficultyFilter::Random,
            MenuSelection::Index(i) => {
                self.settings.difficulty = DifficultyFilter::Exact(Difficulty::ALL[i]);
            }
            MenuSelection::EndOfInput => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn choose_option(&mut self, name: &str, options: &[String]) -> Result<MenuSelection> {
        loop {
            self.refresh_screen()?;
            render_option_menu(&mut self.output, options)?;

            let Some(line) = self.prompt(&format!("Enter a {name} number: "))? else {
                return Ok(MenuSelection::EndOfInput);
            };

            match parse_menu_choice(&line, 0..=options.len()) {
                Ok(0) => return Ok(MenuSelection::Random),
                Ok(choice) => return Ok(MenuSelection::Index(choice - 1)),
                Err(e) => self.pending_error = Some(e.to_string()),
            }
        }
    }

    /// Clear the screen and show the pending error once
    fn refresh_screen(&mut self) -> io::Result<()> {
        clear_screen(&mut self.output)?;
        let error = self.pending_error.take();
        render_error(&mut self.output, error.as_deref())
    }

    /// Print a prompt and read one line; `None` once input is exhausted
    ///
    /// Invalid UTF-8 is replaced rather than reported, so it reaches the usual
    /// input validation.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }
}

/// Run the console game on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// to the terminal.
pub fn run_simple<G: Rng>(
    dictionary: &WordDictionary,
    settings: PlaySettings,
    rng: G,
) -> Result<Statistics> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ConsoleGame::new(dictionary, stdin.lock(), stdout.lock(), rng, settings).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn single_word_dictionary() -> WordDictionary {
        WordDictionary::new(vec![Word::new("cat", "Purrs", "Chases mice", "animals")])
    }

    fn play(dictionary: &WordDictionary, script: &str) -> (Statistics, String) {
        play_with(dictionary, script, PlaySettings::default())
    }

    fn play_with(
        dictionary: &WordDictionary,
        script: &str,
        settings: PlaySettings,
    ) -> (Statistics, String) {
        play_bytes(dictionary, script.as_bytes(), settings)
    }

    fn play_bytes(
        dictionary: &WordDictionary,
        script: &[u8],
        settings: PlaySettings,
    ) -> (Statistics, String) {
        let mut output = Vec::new();
        let stats = ConsoleGame::new(
            dictionary,
            Cursor::new(script),
            &mut output,
            StdRng::seed_from_u64(17),
            settings,
        )
        .run()
        .unwrap();
        (stats, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_round() {
        let dictionary = single_word_dictionary();
        let (stats, output) = play(&dictionary, "1\nc\nA\nt\n2\n");

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
        assert!(output.contains("you won"));
        assert!(output.contains("c _ _"));
    }

    #[test]
    fn losing_round() {
        let dictionary = single_word_dictionary();
        let (stats, output) = play(&dictionary, "1\nb\nd\ne\nf\ng\nh\ni\n2\n");

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
        assert!(output.contains("you lost"));
    }

    #[test]
    fn repeated_letter_is_reported() {
        let dictionary = single_word_dictionary();
        let (_, output) = play(&dictionary, "1\nb\nb\n4\n");
        assert!(output.contains("letter 'b' was already guessed"));
        assert!(output.contains("Attempts left: 6"));
    }

    #[test]
    fn hint_reuse_is_reported_and_hint_stays_visible() {
        let dictionary = single_word_dictionary();
        let (stats, output) = play(&dictionary, "1\n1\n1\n3\n2\n");

        assert!(output.contains("hint 1 was already used"));
        assert!(output.contains("Purrs"));
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn invalid_inputs_are_reported() {
        let dictionary = single_word_dictionary();
        let (_, output) = play(&dictionary, "9\n1\nxy\n4\n");
        assert!(output.contains("invalid input '9', please enter a menu number"));
        assert!(output.contains("invalid input 'xy'"));
    }

    #[test]
    fn invalid_utf8_line_is_reprompted() {
        let dictionary = single_word_dictionary();
        let (stats, output) = play_bytes(
            &dictionary,
            b"\xff\n1\n\xff\nc\na\nt\n2\n",
            PlaySettings::default(),
        );

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
        assert!(output.contains("invalid input '\u{fffd}', please enter a menu number"));
        assert!(output.contains(
            "invalid input '\u{fffd}', please enter a menu number or a single letter"
        ));
        assert!(output.contains("you won"));
    }

    #[test]
    fn no_matching_word_returns_to_menu() {
        let dictionary = single_word_dictionary();
        // Difficulty menu: 3 = Hard; then start, then exit
        let (stats, output) = play(&dictionary, "3\n3\n1\n4\n");

        assert!(output.contains("no words found for category (Random) and difficulty (Hard)"));
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn category_menu_lists_live_categories() {
        let mut dictionary = single_word_dictionary();
        dictionary.add_word("pear", "Bell shaped", "Orchard", "fruits");
        let (_, output) = play(&dictionary, "2\n2\n4\n");

        assert!(output.contains("1. animals"));
        assert!(output.contains("2. fruits"));
        assert!(output.contains("fruits"));
    }

    #[test]
    fn preselected_category_is_used() {
        let mut dictionary = single_word_dictionary();
        dictionary.add_word("pear", "Bell shaped", "Orchard", "fruits");
        let settings = PlaySettings {
            difficulty: DifficultyFilter::Random,
            category: CategoryFilter::named("fruits"),
        };
        let (stats, _) = play_with(&dictionary, "1\np\ne\na\nr\n2\n", settings);
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn back_to_menu_resets_filters() {
        let dictionary = single_word_dictionary();
        let settings = PlaySettings {
            difficulty: DifficultyFilter::Exact(Difficulty::Easy),
            category: CategoryFilter::named("animals"),
        };
        let (stats, output) = play_with(&dictionary, "1\n3\n1\n4\n", settings);

        assert_eq!(stats.total_games, 1);
        assert!(output.contains("Choose category (current: "));
        assert!(output.contains("Random"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let dictionary = single_word_dictionary();
        let (stats, output) = play(&dictionary, "");
        assert_eq!(stats.total_games, 0);
        assert!(output.contains("Thanks for playing!"));
    }
}
