//! Rules engine for an UNO-style card game: deck construction, shuffling
//! and dealing, and the turn state machine that applies played cards.
//!
//! The engine renders nothing and blocks on nothing. A presentation layer
//! constructs a [`game::Game`], calls [`game::Game::play_card`] and
//! [`game::Game::choose_color`] in response to input, and reads the state
//! back through the accessors to re-render.

pub mod card;
mod constants;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod turn;
