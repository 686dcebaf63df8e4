//! TUI rendering with ratatui
//!
//! Gallows, masked word and session panels for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameStatus, HangmanGame};
use crate::output::formatters::{gallows_for, spaced, used_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Info
        ])
        .split(chunks[1]);

    match (&app.game, app.input_mode) {
        (Some(game), InputMode::Playing | InputMode::Finished) => {
            render_board(f, game, main_chunks[0]);
        }
        _ => render_menu(f, app, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Category:   "),
            Span::styled(
                app.settings.category.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Difficulty: "),
            Span::styled(
                app.settings.difficulty.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(format!("Words available: {}", app.dictionary.len())),
        Line::from(""),
        Line::from("n / Enter  start a game"),
        Line::from("c          next category"),
        Line::from("d          next difficulty"),
        Line::from("q          quit"),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, game: &HangmanGame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Gallows
            Constraint::Length(3), // Word
        ])
        .split(area);

    let figure_color = match game.status() {
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
        GameStatus::InProgress => Color::White,
    };
    let gallows = Paragraph::new(gallows_for(game))
        .style(Style::default().fg(figure_color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " {} | {} ",
                    game.current_word().category(),
                    game.current_word().difficulty()
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(gallows, chunks[0]);

    // Reveal the answer once the round is over
    let shown = if game.is_game_over() {
        game.current_word().text().to_string()
    } else {
        game.word_display()
    };
    let word = Paragraph::new(spaced(&shown).to_uppercase())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(word, chunks[1]);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(4), // Letters and hints
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_attempts(f, app.game.as_ref(), chunks[0]);
    render_letters_and_hints(f, app.game.as_ref(), chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, game: Option<&HangmanGame>, area: Rect) {
    let (remaining, max) = game.map_or((0, 0), |g| (g.remaining_attempts(), g.max_attempts()));
    let percent = if max == 0 {
        0
    } else {
        (remaining * 100 / max) as u16
    };
    let color = match percent {
        0..=33 => Color::Red,
        34..=66 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{max} left"));

    f.render_widget(gauge, area);
}

fn render_letters_and_hints(f: &mut Frame, game: Option<&HangmanGame>, area: Rect) {
    let content = game.map_or_else(
        || vec![Line::from("No game in progress")],
        |game| {
            let [hint1, hint2] = game.revealed_hints();
            vec![
                Line::from(format!("Used: {}", used_letters(game))),
                Line::from(format!("Hint 1 (1): {}", hint1.unwrap_or("-"))),
                Line::from(format!("Hint 2 (2): {}", hint2.unwrap_or("-"))),
            ]
        },
    );

    let paragraph = Paragraph::new(content)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Menu => "Mode: Menu",
        InputMode::Playing => "Mode: Playing",
        InputMode::Finished => "Mode: Round over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Menu => "n: Start | c: Category | d: Difficulty | q: Quit",
        InputMode::Playing => "a-z: Guess | 1/2: Hints | Esc: Give up | Ctrl-C: Quit",
        InputMode::Finished => "n: New game | m: Menu | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
