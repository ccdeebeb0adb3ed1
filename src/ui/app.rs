use crate::config::GameConfig;
use crate::game::{BoardSize, GameOutcome, GameState, MoveError};
use crate::table::Table;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    table: Table,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(setup: GameConfig) -> Self {
        let table = Table::new(setup);
        let selected_column = table.state().cols() / 2;
        App {
            table,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn state(&self) -> &GameState {
        self.table.state()
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.table.state().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('g') => {
                let inverted = !self.table.state().inverted_gravity();
                self.table.set_inverted_gravity(inverted);
                self.message = Some(if inverted {
                    "Gravity inverted: pieces fall up".to_string()
                } else {
                    "Gravity normal: pieces fall down".to_string()
                });
            }
            KeyCode::Char('r') => {
                self.table.restart();
                self.new_game_started();
            }
            KeyCode::Char(c @ '1'..='3') => {
                let size = match c {
                    '1' => BoardSize::Small,
                    '2' => BoardSize::Medium,
                    _ => BoardSize::Large,
                };
                self.table.new_game(size);
                self.new_game_started();
            }
            _ => {}
        }
    }

    fn new_game_started(&mut self) {
        self.selected_column = self.table.state().cols() / 2;
        self.message = Some(format!("New {} game started!", self.table.size()));
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.table.play(self.selected_column as i64) {
            Ok(_) => {
                // Check if game just ended
                if let Some(outcome) = self.table.state().outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => {
                            format!("{} wins! Press 'r' to restart.", player.name())
                        }
                        GameOutcome::Draw => "It's a draw! Press 'r' to restart.".to_string(),
                    });
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            self.table.state(),
            self.table.size(),
            self.selected_column,
            &self.message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player};

    fn app() -> App {
        App::new(GameConfig {
            size: BoardSize::Small,
            seed: Some(5),
            ..GameConfig::default()
        })
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = app();
        assert_eq!(app.selected_column(), 3);
        assert_eq!(app.state().cols(), 7);
    }

    #[test]
    fn test_selection_clamped_to_board() {
        let mut app = app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_enter_drops_piece() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().board().get(5, 3), Cell::One);
        assert_eq!(app.state().current_player(), Player::Two);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = app();
        for _ in 0..6 {
            press(&mut app, KeyCode::Char(' '));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Column is full!"));
    }

    #[test]
    fn test_gravity_toggle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        assert!(app.state().inverted_gravity());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().board().get(0, 3), Cell::One);
        press(&mut app, KeyCode::Char('g'));
        assert!(!app.state().inverted_gravity());
    }

    #[test]
    fn test_size_keys_start_new_game() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!((app.state().rows(), app.state().cols()), (7, 8));
        assert_eq!(app.state().move_count(), 0);
        assert_eq!(app.selected_column(), 4);
        assert_eq!(app.message(), Some("New large game started!"));
    }

    #[test]
    fn test_win_message() {
        let mut app = app();
        // Player 1 on columns 0..=3, Player 2 on column 6.
        for col in [0, 6, 1, 6, 2, 6, 3] {
            while app.selected_column() > col {
                press(&mut app, KeyCode::Left);
            }
            while app.selected_column() < col {
                press(&mut app, KeyCode::Right);
            }
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.message(), Some("Player 1 wins! Press 'r' to restart."));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
