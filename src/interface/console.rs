use crate::application::game_service::{GameService, GameServiceError, MatchOutcome};
use crate::infrastructure::display::render_result;

pub struct ConsoleInterface;

impl ConsoleInterface {
    pub fn run(game_service: GameService) -> Result<MatchOutcome, GameServiceError> {
        println!("Starting game...");
        let outcome = game_service.run()?;
        println!("{}", render_result(outcome.status));
        Ok(outcome)
    }
}
