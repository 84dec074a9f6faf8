use crate::domain::models::{Position, SIDE};
use crate::domain::services::MoveStrategy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Sequential,
    Random,
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(StrategyKind::Sequential),
            "random" => Ok(StrategyKind::Random),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Sequential => write!(f, "sequential"),
            StrategyKind::Random => write!(f, "random"),
        }
    }
}

/// Builds a strategy. Random strategies draw from `seed` when given, from
/// OS entropy otherwise.
pub fn build_strategy(kind: StrategyKind, seed: Option<u64>) -> Box<dyn MoveStrategy> {
    match kind {
        StrategyKind::Sequential => Box::new(SequentialStrategy::new()),
        StrategyKind::Random => match seed {
            Some(seed) => Box::new(RandomStrategy::seeded(seed)),
            None => Box::new(RandomStrategy::from_entropy()),
        },
    }
}

/// Walks the cells in row-major order, starting over every turn.
#[derive(Debug, Default)]
pub struct SequentialStrategy {
    cursor: usize,
}

impl SequentialStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MoveStrategy for SequentialStrategy {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn begin_turn(&mut self) {
        self.cursor = 0;
    }

    fn next_candidate(&mut self) -> Option<Position> {
        if self.cursor >= SIDE * SIDE {
            return None;
        }
        let pos = Position::new(self.cursor / SIDE, self.cursor % SIDE);
        self.cursor += 1;
        Some(pos)
    }
}

/// Proposes uniformly random cells with replacement and never runs dry.
pub struct RandomStrategy<R: Rng + Send = StdRng> {
    rng: R,
}

impl RandomStrategy<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng + Send> RandomStrategy<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> MoveStrategy for RandomStrategy<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn next_candidate(&mut self) -> Option<Position> {
        let row = self.rng.gen_range(0..SIDE);
        let col = self.rng.gen_range(0..SIDE);
        Some(Position::new(row, col))
    }
}
