use anyhow::Result;
use std::time::Duration;
use tictactoe_duel::application::actor::PlayerActor;
use tictactoe_duel::application::game_service::GameService;
use tictactoe_duel::config::AppConfig;
use tictactoe_duel::domain::models::Marker;
use tictactoe_duel::infrastructure::display::ConsoleRenderer;
use tictactoe_duel::infrastructure::strategies::build_strategy;
use tictactoe_duel::interface::console::ConsoleInterface;

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging.level);
    config.log_summary();

    let player_x = PlayerActor::new(
        Marker::X,
        build_strategy(config.players.x, config.seed_for_x()),
    );
    let player_o = PlayerActor::new(
        Marker::O,
        build_strategy(config.players.o, config.seed_for_o()),
    );

    let renderer =
        ConsoleRenderer::new().with_delay(Duration::from_millis(config.display.move_delay_ms));
    let game = GameService::new(player_x, player_o)?.with_observer(Box::new(renderer));

    ConsoleInterface::run(game)?;
    Ok(())
}
