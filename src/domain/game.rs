use crate::domain::board::Board;
use crate::domain::models::{GameStatus, Marker, MoveRecord, Position};
use crate::domain::services::MoveObserver;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, trace, warn};

struct GameState {
    board: Board,
    turn: Marker,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

impl GameState {
    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_player: self.turn,
            status: self.status,
            history: self.history.clone(),
        }
    }
}

/// A consistent copy of the game taken under the lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_player: Marker,
    pub status: GameStatus,
    pub history: Vec<MoveRecord>,
}

/// The shared game object.
/// Owns the grid, the turn marker and the game status behind a single mutex,
/// and is the only place any of them change. Both players block on the same
/// condition variable until it is their turn or the game is over.
pub struct SharedGame {
    state: Mutex<GameState>,
    turn_changed: Condvar,
    observer: Option<Box<dyn MoveObserver>>,
}

impl SharedGame {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GameState {
                board: Board::new(),
                turn: Marker::X,
                status: GameStatus::InProgress,
                history: Vec::with_capacity(9),
            }),
            turn_changed: Condvar::new(),
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn MoveObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    // The state is only ever changed by whole-field assignments, so a panic
    // on another thread cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Submits a move for `player`, blocking until it is that player's turn
    /// or the game is over.
    ///
    /// Returns `false` without touching any state when the game has ended,
    /// the coordinates are outside the board, or the cell is occupied.
    pub fn submit_move(&self, player: Marker, row: usize, col: usize) -> bool {
        self.submit(player, Position::new(row, col))
    }

    pub fn submit(&self, player: Marker, pos: Position) -> bool {
        let guard = self.lock();
        let mut state = self
            .turn_changed
            .wait_while(guard, |s| s.status == GameStatus::InProgress && s.turn != player)
            .unwrap_or_else(PoisonError::into_inner);

        if state.status.is_over() {
            trace!(%player, %pos, "rejected: game already over");
            return false;
        }
        if !state.board.place(pos, player) {
            trace!(%player, %pos, "rejected: cell unavailable");
            return false;
        }
        state.history.push(MoveRecord {
            marker: player,
            position: pos,
        });
        debug!(%player, %pos, move_number = state.history.len(), "move accepted");

        // A line on the ninth move is a win, not a draw.
        if state.board.has_line(player) {
            state.status = GameStatus::WonBy(player);
            info!(winner = %player, "game won");
        } else if state.board.is_full() {
            state.status = GameStatus::Draw;
            info!("game drawn");
        } else {
            state.turn = player.opponent();
            debug!(next = %state.turn, "turn passed");
        }

        if let Some(observer) = &self.observer {
            observer.on_move(&state.snapshot());
        }

        self.turn_changed.notify_all();
        true
    }

    /// Ends an unfinished game because `player` can no longer move, waking
    /// every blocked caller. A game that is already over is left as is.
    pub fn abandon(&self, player: Marker) {
        let mut state = self.lock();
        if state.status.is_over() {
            return;
        }
        state.status = GameStatus::Abandoned(player);
        warn!(%player, "game abandoned");
        self.turn_changed.notify_all();
    }

    /// Blocks until the game reaches a terminal status and returns it.
    pub fn wait_until_finished(&self) -> GameStatus {
        let guard = self.lock();
        let state = self
            .turn_changed
            .wait_while(guard, |s| s.status == GameStatus::InProgress)
            .unwrap_or_else(PoisonError::into_inner);
        state.status
    }

    pub fn status(&self) -> GameStatus {
        self.lock().status
    }

    pub fn current_player(&self) -> Marker {
        self.lock().turn
    }

    pub fn winner(&self) -> Option<Marker> {
        self.lock().status.winner()
    }

    pub fn board(&self) -> Board {
        self.lock().board
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }
}

impl Default for SharedGame {
    fn default() -> Self {
        Self::new()
    }
}
