//! UI rendering using ratatui.

use super::app::App;
use cross_zero::{CELLS, Notifier, Player, Position, ScoreStore, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Draws the main UI.
pub fn draw<S: ScoreStore, N: Notifier>(f: &mut Frame, app: &mut App<S, N>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Cross-Zero")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(BOARD_WIDTH), Constraint::Length(20)])
        .split(chunks[1]);

    let board_area = center_rect(body[0], BOARD_WIDTH, BOARD_HEIGHT);
    app.set_board_area(board_area);
    render_board(f, board_area, app, Instant::now());
    render_scores(f, body[1], app);

    let status = Paragraph::new(app.controller().status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let keys = app.keys();
    let help = Paragraph::new(format!(
        "Click/Enter/1-9: mark | Arrows: move | {}: new game | {}: reset scores | Q: quit",
        keys.new_game().to_ascii_uppercase(),
        keys.reset_scores().to_ascii_uppercase(),
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

/// Screen rectangles of the nine cells, in index order.
pub fn cell_areas(board_area: Rect) -> [Rect; CELLS] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); CELLS];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = cell;
        }
    }
    cells
}

/// Index of the cell containing the screen point, if any.
pub fn cell_at(board_area: Rect, column: u16, row: u16) -> Option<usize> {
    cell_areas(board_area)
        .iter()
        .position(|cell| cell.contains(ratatui::layout::Position::new(column, row)))
}

fn render_board<S: ScoreStore, N: Notifier>(
    f: &mut Frame,
    area: Rect,
    app: &App<S, N>,
    now: Instant,
) {
    let game = app.controller().game();
    let winning = game.winning_line();
    let pulse = app.pulse_on(now);

    for (index, cell) in cell_areas(area).into_iter().enumerate() {
        let square = game.board().squares()[index];
        let (symbol, mut style) = match square {
            Square::Empty => (
                (index + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Occupied(Player::X) => (
                "X".to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Player::O) => (
                "O".to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        let mut background = Style::default();
        if winning.is_some_and(|line| line.contains(index)) {
            background = background.bg(Color::Green);
            style = style.fg(Color::Black);
            if pulse {
                background = background.add_modifier(Modifier::REVERSED);
            }
        } else if Position::from_index(index) == Some(app.cursor()) {
            background = background.bg(Color::White);
            style = style.fg(Color::Black);
        }

        let text = Text::from(vec![Line::raw(""), Line::styled(symbol, style)]);
        let paragraph = Paragraph::new(text)
            .style(background)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, cell);
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(area);
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_scores<S: ScoreStore, N: Notifier>(f: &mut Frame, area: Rect, app: &App<S, N>) {
    let scores = app.controller().scores();
    let lines = vec![
        Line::styled(
            format!("X     {}", scores.x),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("O     {}", scores.o),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::raw(format!("Draw  {}", scores.draws)),
    ];
    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Scores"));
    f.render_widget(panel, area);
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
