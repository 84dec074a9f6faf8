pub mod display;
pub mod strategies;
