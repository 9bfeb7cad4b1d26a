//! TUI rendering with ratatui

use super::app::{App, BoardRow, InputMode, MessageStyle};
use crate::core::{DisplayState, LetterFeedback, UNKNOWN_MARKER};
use crate::duel::{Player, Side};
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE DUEL - You vs the AI")
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

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(area);

    render_target(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
}

/// Revealed slots as tiles, with unknown positions dimmed
fn target_line(display: &DisplayState) -> Line<'static> {
    let mut spans = vec![Span::raw("Target Word: ")];
    for slot in display.slots() {
        let span = match slot {
            Some(letter) => Span::styled(
                format!(" {} ", char::from(*letter)),
                tile_style(LetterFeedback::Correct),
            ),
            None => Span::styled(
                format!(" {UNKNOWN_MARKER} "),
                tile_style(LetterFeedback::Absent),
            ),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }

    let revealed_style = if display.is_complete() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    spans.push(Span::styled(
        format!("({}/{})", display.revealed_count(), display.slots().len()),
        revealed_style,
    ));
    Line::from(spans)
}

fn render_target(f: &mut Frame, app: &App, area: Rect) {
    // Reveal the word once the game is decided
    let first = app.last_outcome.as_ref().map_or_else(
        || target_line(app.game.display()),
        |outcome| {
            Line::from(vec![
                Span::raw("Target Word: "),
                Span::styled(
                    outcome.target.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        },
    );

    let content = vec![
        first,
        Line::from(format!(
            "Number of Guesses Left: {}",
            app.game.remaining_turns()
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn tile_style(kind: LetterFeedback) -> Style {
    let base = Style::default()
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);
    match kind {
        LetterFeedback::Correct => base.bg(Color::Green),
        LetterFeedback::Present => base.bg(Color::Yellow),
        LetterFeedback::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn board_line(index: usize, row: &BoardRow) -> Line<'static> {
    let label_style = match row.side {
        Side::Human => Style::default().fg(Color::Cyan),
        Side::Ai => Style::default().fg(Color::Magenta),
    };

    let mut spans = vec![
        Span::raw(format!("{:>2}. ", index + 1)),
        Span::styled(format!("{:<7}", row.side.to_string()), label_style),
    ];
    for (&letter, &kind) in row.word.letters().iter().zip(row.feedback.letters()) {
        spans.push(Span::styled(
            format!(" {} ", char::from(letter)),
            tile_style(kind),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!(
            " {}🟩 {}🟨",
            row.feedback.count_correct(),
            row.feedback.count_present()
        ),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<ListItem> = app
        .board
        .iter()
        .enumerate()
        .map(|(i, row)| ListItem::new(board_line(i, row)))
        .collect();

    let board = List::new(rows).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Percentage(45),
        ])
        .split(area);

    render_turn_gauge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_ai_panel(f, app, chunks[2]);
}

fn render_turn_gauge(f: &mut Frame, app: &App, area: Rect) {
    let used = app.game.turns_used();
    let max = app.game.max_turns();
    let ratio = if max == 0 {
        0.0
    } else {
        (used as f64 / max as f64).min(1.0)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Shared Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
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

    let messages_list = List::new(messages)
        .block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_ai_panel(f: &mut Frame, app: &App, area: Rect) {
    let solver = app.ai.solver();
    let total = app.game.pools().solutions().len();
    let remaining = solver.count_candidates();

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Strategy: "),
            Span::styled(
                solver.strategy().name(),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(format!(
            "[{}] {remaining}/{total}",
            create_progress_bar(remaining as f64, total as f64, 16)
        )),
    ];

    if app.verbose {
        // First diagnostics line repeats the candidate count
        let dim = Style::default().fg(Color::DarkGray);
        for line in app.ai.diagnostics().into_iter().skip(1) {
            lines.push(Line::styled(line, dim));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" AI Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Player's turn: type a word and press Enter ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let stats_text = format!(
        "Games: {} | You: {} | AI: {}",
        app.stats.total_games, app.stats.human_wins, app.stats.ai_wins
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Esc: Quit | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
