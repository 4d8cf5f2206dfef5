//! Kuba: two players push marbles around a 7×7 grid.
//!
//! - Each player owns 8 marbles of one color; 13 red marbles are neutral
//! - On your turn, push one of your marbles one cell orthogonally. The
//!   cell behind it must be empty, and every marble in front of it moves
//!   along too
//! - Marbles pushed past the edge leave the game; red ones count as
//!   captures for the pusher
//! - You may not push your own marble off, nor immediately undo the
//!   previous push
//! - Win by capturing 7 red marbles, by removing every opposing marble, or
//!   by leaving the opponent without a legal push

mod game;
mod rules;

pub use game::{KubaGame, KubaGameBuilder};
pub use rules::KubaRules;
