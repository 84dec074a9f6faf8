use crate::application::actor::{ActorReport, PlayerActor};
use crate::domain::board::Board;
use crate::domain::game::SharedGame;
use crate::domain::models::{GameStatus, Marker, MoveRecord};
use crate::domain::services::MoveObserver;
use std::thread;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameServiceError {
    #[error("both actors play {0}")]
    DuplicateMarker(Marker),
    #[error("actor for {0} panicked")]
    ActorPanicked(Marker),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub status: GameStatus,
    pub board: Board,
    pub history: Vec<MoveRecord>,
    pub reports: [ActorReport; 2],
}

/// Runs one match: a fresh shared game, one thread per actor, joined before
/// the outcome is reported.
pub struct GameService {
    player_x: PlayerActor,
    player_o: PlayerActor,
    observer: Option<Box<dyn MoveObserver>>,
}

impl GameService {
    pub fn new(first: PlayerActor, second: PlayerActor) -> Result<Self, GameServiceError> {
        if first.marker() == second.marker() {
            return Err(GameServiceError::DuplicateMarker(first.marker()));
        }
        let (player_x, player_o) = match first.marker() {
            Marker::X => (first, second),
            Marker::O => (second, first),
        };
        Ok(GameService {
            player_x,
            player_o,
            observer: None,
        })
    }

    pub fn with_observer(mut self, observer: Box<dyn MoveObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn run(self) -> Result<MatchOutcome, GameServiceError> {
        let GameService {
            mut player_x,
            mut player_o,
            observer,
        } = self;

        let mut game = SharedGame::new();
        if let Some(observer) = observer {
            game = game.with_observer(observer);
        }

        info!(
            x = player_x.strategy_name(),
            o = player_o.strategy_name(),
            "match starting"
        );

        let (report_x, report_o) = thread::scope(|s| {
            let game = &game;
            let handle_x = s.spawn(move || player_x.run(game));
            let handle_o = s.spawn(move || player_o.run(game));
            (handle_x.join(), handle_o.join())
        });
        let report_x = report_x.map_err(|_| GameServiceError::ActorPanicked(Marker::X))?;
        let report_o = report_o.map_err(|_| GameServiceError::ActorPanicked(Marker::O))?;

        let snapshot = game.snapshot();
        info!(status = ?snapshot.status, moves = snapshot.history.len(), "match finished");

        Ok(MatchOutcome {
            status: snapshot.status,
            board: snapshot.board,
            history: snapshot.history,
            reports: [report_x, report_o],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::strategies::{RandomStrategy, SequentialStrategy};

    #[test]
    fn test_duplicate_marker_rejected() {
        let result = GameService::new(
            PlayerActor::new(Marker::O, Box::new(SequentialStrategy::new())),
            PlayerActor::new(Marker::O, Box::new(RandomStrategy::seeded(1))),
        );
        assert_eq!(result.err(), Some(GameServiceError::DuplicateMarker(Marker::O)));
    }

    #[test]
    fn test_actor_order_does_not_matter() {
        let service = GameService::new(
            PlayerActor::new(Marker::O, Box::new(SequentialStrategy::new())),
            PlayerActor::new(Marker::X, Box::new(SequentialStrategy::new())),
        )
        .expect("distinct markers");
        let outcome = service.run().expect("match completes");

        // Both sequential: X takes (0,0), O (0,1), X (0,2), ... X wins on the
        // anti-diagonal with its fourth stone at (2,0).
        assert_eq!(outcome.status, GameStatus::WonBy(Marker::X));
        assert_eq!(outcome.history.len(), 7);
        assert_eq!(outcome.history[0].marker, Marker::X);
        assert_eq!(outcome.reports[0].marker, Marker::X);
        assert_eq!(outcome.reports[1].marker, Marker::O);
    }
}
