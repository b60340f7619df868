//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tictactoe_core::{Cell, Position, Snapshot, Symbol};

/// Renders the board, highlighting the cursor and any winning line.
pub fn render_board(f: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], snapshot, cursor, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], snapshot, cursor, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], snapshot, cursor, 6);
}

fn render_row(f: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    render_cell(f, cols[0], snapshot, cursor, start);
    render_vertical_sep(f, cols[1]);
    render_cell(f, cols[2], snapshot, cursor, start + 1);
    render_vertical_sep(f, cols[3]);
    render_cell(f, cols[4], snapshot, cursor, start + 2);
}

fn render_cell(f: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position, index: usize) {
    let cell = snapshot.board().get(index).unwrap_or_default();
    let (text, base_style) = match cell {
        Cell::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Symbol::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Symbol::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = snapshot
        .phase()
        .winning_line()
        .is_some_and(|line| line.contains(index));

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if snapshot.is_terminal() {
        base_style.add_modifier(Modifier::DIM)
    } else if index == cursor.index() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Pad so highlights cover the whole cell, not just the glyph.
    let lines = vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(format!("{:^width$}", text, width = area.width as usize), style)),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); 3])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
