//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{KeyboardStatus, MAX_GUESSES, Mark, WORD_LENGTH};
use crate::game::{Phase, SecretChooser};
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<C: SecretChooser>(f: &mut Frame, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(16),    // Board + side panels
            Constraint::Length(3),  // Input area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 HEXORDLE - six letters, six tries")
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

fn mark_style(mark: Option<Mark>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match mark {
        Some(Mark::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(Mark::Misplaced) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Mark::Incorrect) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn tile(letter: char, mark: Option<Mark>) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), mark_style(mark))
}

fn render_board<C: SecretChooser>(f: &mut Frame, app: &App<C>, area: Rect) {
    let session = app.game.session();
    let history = session.history();
    let typing = app.game.phase() == Phase::AwaitingGuess;

    let mut lines = vec![Line::from("")];
    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        if let Some(turn) = history.get(row) {
            for (letter, &mark) in turn.guess.as_str().chars().zip(turn.feedback.marks()) {
                spans.push(tile(letter, Some(mark)));
                spans.push(Span::raw(" "));
            }
        } else {
            let pending: Vec<char> = if typing && row == history.len() {
                app.input_buffer.chars().collect()
            } else {
                Vec::new()
            };
            for i in 0..WORD_LENGTH {
                let letter = pending.get(i).copied().unwrap_or('·');
                spans.push(tile(letter, None));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if app.game.phase() == Phase::AwaitingReplayChoice && !session.is_won() {
        lines.push(Line::from(Span::styled(
            format!("Answer: {}", session.secret().as_str().to_uppercase()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Round {} ", app.game.round()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<C: SecretChooser>(f: &mut Frame, app: &App<C>, area: Rect) {
    let constraints = if app.show_keyboard {
        vec![
            Constraint::Length(5),
            Constraint::Length(9),
            Constraint::Min(4),
        ]
    } else {
        vec![Constraint::Length(9), Constraint::Min(4)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if app.show_keyboard {
        render_keyboard(f, &app.game.session().keyboard(), chunks[0]);
        render_stats(f, app, chunks[1]);
        render_messages(f, app, chunks[2]);
    } else {
        render_stats(f, app, chunks[0]);
        render_messages(f, app, chunks[1]);
    }
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardStatus, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    Span::styled(
                        letter.to_ascii_uppercase().to_string(),
                        mark_style(keyboard.get(letter)),
                    )
                })
                .flat_map(|span| [span, Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(panel, area);
}

fn render_stats<C: SecretChooser>(f: &mut Frame, app: &App<C>, area: Rect) {
    let stats = app.game.statistics();
    let most = stats.distribution().iter().copied().max().unwrap_or(0);

    let mut lines: Vec<Line> = stats
        .distribution()
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Line::from(vec![
                Span::raw(format!("{} ", i + 1)),
                Span::styled(
                    create_progress_bar(count, most, 16),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled(
        format!("Lost: {}", stats.losses()),
        Style::default().fg(Color::Red),
    )));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Games won in ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn render_messages<C: SecretChooser>(f: &mut Frame, app: &App<C>, area: Rect) {
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

fn render_input<C: SecretChooser>(f: &mut Frame, app: &App<C>, area: Rect) {
    let color = match app.game.phase() {
        Phase::AwaitingReplayChoice => Color::Green,
        _ => Color::Yellow,
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(app.prompt())
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<C: SecretChooser>(f: &mut Frame, app: &App<C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let session = app.game.session();
    let attempts = Paragraph::new(format!(
        "Attempts: {}/{MAX_GUESSES}",
        session.attempts_used()
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats = app.game.statistics();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.games_played(),
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Enter: Submit | Esc: Clear | Tab: Keyboard | Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
