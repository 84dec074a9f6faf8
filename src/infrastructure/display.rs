use crate::domain::board::Board;
use crate::domain::game::GameSnapshot;
use crate::domain::models::{Cell, GameStatus, Marker};
use crate::domain::services::MoveObserver;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::warn;

const ROW_SEPARATOR: &str = "---+---+---";

fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Occupied(Marker::X) => 'X',
        Cell::Occupied(Marker::O) => 'O',
    }
}

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    let rows = board.rows();
    for (i, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|&c| format!(" {} ", symbol(c))).collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if i + 1 < rows.len() {
            out.push_str(ROW_SEPARATOR);
            out.push('\n');
        }
    }
    out
}

pub fn render_snapshot(snapshot: &GameSnapshot) -> String {
    let mut out = String::from("\nCurrent board:\n");
    out.push_str(&render_board(&snapshot.board));
    out.push_str(&format!("Current player: {}\n", snapshot.current_player));
    out
}

pub fn render_result(status: GameStatus) -> String {
    match status {
        GameStatus::WonBy(marker) => format!("Winner: {}!", marker),
        GameStatus::Draw => "Draw!".to_string(),
        GameStatus::Abandoned(marker) => format!("Game abandoned: player {} stopped.", marker),
        GameStatus::InProgress => "Game still in progress".to_string(),
    }
}

/// Prints every accepted move to stdout, optionally pausing afterwards so a
/// human can follow the game.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    delay: Duration,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl MoveObserver for ConsoleRenderer {
    fn on_move(&self, snapshot: &GameSnapshot) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout
            .write_all(render_snapshot(snapshot).as_bytes())
            .and_then(|_| stdout.flush())
        {
            warn!(error = %e, "failed to render board");
        }
        drop(stdout);

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::game::SharedGame;

    #[test]
    fn test_empty_board_layout() {
        let output = render_board(&Board::new());
        assert_eq!(
            output,
            "   |   |   \n---+---+---\n   |   |   \n---+---+---\n   |   |   \n"
        );
    }

    #[test]
    fn test_snapshot_shows_markers_and_next_player() {
        let game = SharedGame::new();
        assert!(game.submit_move(Marker::X, 0, 0));
        assert!(game.submit_move(Marker::O, 1, 1));

        let output = render_snapshot(&game.snapshot());
        println!("{}", output);
        assert!(output.contains(" X |   |   \n"));
        assert!(output.contains("   | O |   \n"));
        assert!(output.contains("Current player: X"));
    }

    #[test]
    fn test_result_lines() {
        assert_eq!(render_result(GameStatus::WonBy(Marker::O)), "Winner: O!");
        assert_eq!(render_result(GameStatus::Draw), "Draw!");
        assert_eq!(
            render_result(GameStatus::Abandoned(Marker::X)),
            "Game abandoned: player X stopped."
        );
    }
}
