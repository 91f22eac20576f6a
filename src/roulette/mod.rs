//! Roulette picker over user-supplied labels.
//!
//! A [`Wheel`] reports a fixed number of cosmetic ticks through a
//! [`Progress`] reporter, then makes one uniform draw by position.
mod items;
mod progress;
mod wheel;

pub use items::*;
pub use progress::*;
pub use wheel::*;
