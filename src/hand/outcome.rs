use super::Move;
use colored::*;

/// Result of a round, told from the user's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

/// Classify a (user, computer) pair.
///
/// Every one of the nine ordered pairs has its own arm, so the
/// three outcomes partition the pairs exactly 3/3/3.
pub const fn resolve(user: Move, computer: Move) -> Outcome {
    match (user, computer) {
        (Move::Rock, Move::Rock) => Outcome::Draw,
        (Move::Rock, Move::Paper) => Outcome::Lose,
        (Move::Rock, Move::Scissors) => Outcome::Win,
        (Move::Paper, Move::Rock) => Outcome::Win,
        (Move::Paper, Move::Paper) => Outcome::Draw,
        (Move::Paper, Move::Scissors) => Outcome::Lose,
        (Move::Scissors, Move::Rock) => Outcome::Lose,
        (Move::Scissors, Move::Paper) => Outcome::Win,
        (Move::Scissors, Move::Scissors) => Outcome::Draw,
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "{}", "당신이 이겼습니다!".green()),
            Outcome::Lose => write!(f, "{}", "당신이 졌습니다!".red()),
            Outcome::Draw => write!(f, "{}", "무승부!".yellow()),
        }
    }
}
