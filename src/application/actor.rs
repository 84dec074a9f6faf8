use crate::domain::game::SharedGame;
use crate::domain::models::Marker;
use crate::domain::services::MoveStrategy;
use std::thread;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorReport {
    pub marker: Marker,
    pub accepted: usize,
    pub rejected: usize,
}

/// Abandons the game if the owning actor unwinds, so the opponent parked in
/// `submit` is woken instead of waiting forever.
struct AbandonOnPanic<'a> {
    game: &'a SharedGame,
    marker: Marker,
}

impl Drop for AbandonOnPanic<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.game.abandon(self.marker);
        }
    }
}

/// Drives one player: keeps feeding its strategy's candidates to the shared
/// game until the game is over.
pub struct PlayerActor {
    marker: Marker,
    strategy: Box<dyn MoveStrategy>,
}

impl PlayerActor {
    pub fn new(marker: Marker, strategy: Box<dyn MoveStrategy>) -> Self {
        Self { marker, strategy }
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn run(&mut self, game: &SharedGame) -> ActorReport {
        let mut report = ActorReport {
            marker: self.marker,
            accepted: 0,
            rejected: 0,
        };
        debug!(marker = %self.marker, strategy = self.strategy.name(), "actor started");
        let _guard = AbandonOnPanic {
            game,
            marker: self.marker,
        };

        while !game.status().is_over() {
            self.strategy.begin_turn();
            // The first submission of a turn parks inside the game until the
            // opponent has moved.
            let mut landed = false;
            while let Some(pos) = self.strategy.next_candidate() {
                if game.submit(self.marker, pos) {
                    report.accepted += 1;
                    landed = true;
                    break;
                }
                report.rejected += 1;
                if game.status().is_over() {
                    break;
                }
            }
            if !landed {
                thread::yield_now();
            }
        }

        info!(
            marker = %self.marker,
            accepted = report.accepted,
            rejected = report.rejected,
            "actor finished"
        );
        report
    }
}
