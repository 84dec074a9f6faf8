use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tictactoe_duel::application::actor::PlayerActor;
use tictactoe_duel::application::game_service::{GameService, GameServiceError};
use tictactoe_duel::domain::models::{Marker, Position};
use tictactoe_duel::domain::services::MoveStrategy;
use tictactoe_duel::infrastructure::strategies::SequentialStrategy;

struct FailingStrategy;

impl MoveStrategy for FailingStrategy {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn next_candidate(&mut self) -> Option<Position> {
        panic!("no candidate available");
    }
}

fn run_with_timeout(service: GameService) -> Result<(), GameServiceError> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(service.run().map(|_| ()));
    });
    rx.recv_timeout(Duration::from_secs(5))
        .expect("GameService::run did not return after an actor panicked")
}

#[test]
fn test_panicking_first_player_is_reported() {
    let service = GameService::new(
        PlayerActor::new(Marker::X, Box::new(FailingStrategy)),
        PlayerActor::new(Marker::O, Box::new(SequentialStrategy::new())),
    )
    .unwrap();

    assert_eq!(
        run_with_timeout(service),
        Err(GameServiceError::ActorPanicked(Marker::X))
    );
}

#[test]
fn test_panicking_second_player_is_reported() {
    // X has already moved and is parked waiting for O when O blows up.
    let service = GameService::new(
        PlayerActor::new(Marker::X, Box::new(SequentialStrategy::new())),
        PlayerActor::new(Marker::O, Box::new(FailingStrategy)),
    )
    .unwrap();

    assert_eq!(
        run_with_timeout(service),
        Err(GameServiceError::ActorPanicked(Marker::O))
    );
}
