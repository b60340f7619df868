//! UI rendering using ratatui.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;
use tictactoe_core::{Mode, Status};

pub use board::render_board;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(11),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let snapshot = app.snapshot();
    let mode_line = match snapshot.mode() {
        Mode::PlayerVsPlayer => Mode::PlayerVsPlayer.label().to_string(),
        Mode::PlayerVsComputer => format!(
            "{} | You play {}",
            Mode::PlayerVsComputer.label(),
            snapshot.human_symbol()
        ),
    };
    let mode = Paragraph::new(mode_line)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[1]);

    render_board(f, chunks[2], snapshot, app.cursor());

    let mut status_style = Style::default().fg(status_color(app.status()));
    if app.is_flashing(now) {
        status_style = status_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    let status = Paragraph::new(app.status().to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[3]);

    let message = Paragraph::new(app.message().unwrap_or_default())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(message, chunks[4]);

    let help = Paragraph::new(
        "1-9/Enter: Move | Arrows: Cursor | R: Restart | M: Mode | S: Symbol | Q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[5]);
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Winner(_) | Status::HumanWins => Color::Green,
        Status::ComputerWins => Color::Red,
        Status::Draw => Color::Magenta,
        Status::Turn(_) | Status::YourTurn(_) | Status::ComputerTurn(_) => Color::Yellow,
    }
}
