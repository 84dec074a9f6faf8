use crate::domain::game::GameSnapshot;
use crate::domain::models::Position;

/// Candidate-cell policy for one player.
///
/// A strategy never touches the game itself: the actor loop feeds each
/// candidate to `SharedGame::submit_move` and keeps asking until one is
/// accepted, the game ends, or the strategy runs out of candidates.
pub trait MoveStrategy: Send {
    fn name(&self) -> &'static str;

    /// Called once at the start of every turn.
    fn begin_turn(&mut self) {}

    /// `None` means nothing left to try this turn.
    fn next_candidate(&mut self) -> Option<Position>;
}

/// Hook invoked after every accepted move, while the game lock is held.
///
/// Implementations must not call back into the game.
pub trait MoveObserver: Send + Sync {
    fn on_move(&self, snapshot: &GameSnapshot);
}
