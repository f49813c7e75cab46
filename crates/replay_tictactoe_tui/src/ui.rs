//! Stateless UI rendering: board, move list, status.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use replay_tictactoe::{Player, Position, Square};

use crate::app::App;

/// Renders the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and move list
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(area);

    let title = Paragraph::new("Replay Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(19), Constraint::Min(34)])
        .split(chunks[1]);

    draw_board(frame, columns[0], app);
    draw_moves(frame, columns[1], app);

    let status = Paragraph::new(app.engine().status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help =
        Paragraph::new("1-9/enter place | arrows move | j/k select | g jump | t order | q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 13, 7);
    let board = Paragraph::new(board_lines(app))
        .block(Block::default().title("Board").borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(board, board_area);
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let engine = app.engine();
    let board = engine.board();
    let winning = engine.winning_line();

    let mut lines = Vec::new();
    for row in 0..3 {
        let mut spans = Vec::new();
        for col in 0..3 {
            let position = Position::ALL[row * 3 + col];
            let square = board.get(position);

            let (symbol, mut style) = match square {
                Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
                Square::Occupied(Player::X) => (
                    " X ",
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
                Square::Occupied(Player::O) => (
                    " O ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            };
            if winning.is_some_and(|line| line.contains(&position)) {
                style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
            }
            if position == app.cursor() {
                style = style.bg(Color::White).fg(Color::Black);
            }

            spans.push(Span::styled(symbol, style));
            if col < 2 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(Line::from(Span::styled(
                "───┼───┼───",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .engine()
        .list_moves(app.order())
        .map(|entry| {
            let mut style = Style::default();
            if entry.is_current {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            if entry.index == app.selection() {
                style = style.bg(Color::White).fg(Color::Black);
            }
            ListItem::new(Line::from(Span::styled(entry.label, style)))
        })
        .collect();

    let list = List::new(items).block(Block::default().title("Moves").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
