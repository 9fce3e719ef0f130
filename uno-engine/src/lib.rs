pub mod card;
pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod player;
pub mod rules;
pub mod summary;
pub mod turn;
pub mod uno;
