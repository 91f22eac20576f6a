//! Rock-paper-scissors against the house.
//!
//! The user's raw line is validated into a [`Move`], the house draws a
//! [`Move`] uniformly, and [`resolve`] classifies the pair into an [`Outcome`]
//! through an explicit table covering all nine pairs.
mod duel;
mod outcome;
mod play;

pub use duel::*;
pub use outcome::*;
pub use play::*;
