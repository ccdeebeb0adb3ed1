use crate::game::{BoardSize, GameOutcome, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    size: BoardSize,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, size, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, size: BoardSize, area: Rect) {
    let current_player = game_state.current_player();
    let gravity = if game_state.inverted_gravity() {
        "gravity: up"
    } else {
        "gravity: down"
    };
    let (rows, cols) = (game_state.rows(), game_state.cols());

    let status = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => format!("{} wins!", player.name()),
        Some(GameOutcome::Draw) => "Draw".to_string(),
        None => format!("Current Player: {}", current_player.name()),
    };
    let text = format!("{status}  |  {size} {rows}x{cols}  |  {gravity}");

    let header = Paragraph::new(text)
        .style(
            Style::default()
                .fg(player_color(current_player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let lines = board_widget::board_lines(
        game_state.board(),
        selected_column,
        game_state.inverted_gravity(),
    );
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("\u{2190}/\u{2192}: Move  |  Enter: Drop  |  G: Gravity  |  R: Restart  |  Q: Quit");
    let line2 = Line::from("New game:  1 small (6x7)  2 medium (6x9)  3 large (7x8)");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
