pub mod generate;
pub mod interactive;
pub mod strength;
