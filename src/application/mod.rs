pub mod actor;
pub mod game_service;
