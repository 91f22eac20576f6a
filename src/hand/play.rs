use crate::Arbitrary;
use crate::ParlorError;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;

/// Moves in rock-paper-scissors.
///
/// Scissors beats Paper, Rock beats Scissors, Paper beats Rock.
/// Labels are the Korean hand-game words; the domain logic never compares them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    /// 바위 — beats Scissors, loses to Paper.
    Rock,
    /// 보 — beats Rock, loses to Scissors.
    Paper,
    /// 가위 — beats Paper, loses to Rock.
    Scissors,
}

impl Move {
    /// All moves, in menu prompt order (가위, 바위, 보).
    pub const fn all() -> [Self; 3] {
        [Self::Scissors, Self::Rock, Self::Paper]
    }
    /// The move this one defeats.
    /// [`super::resolve`] is the authoritative table; this must agree with it.
    pub const fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// Canonical label. Parsing accepts exactly these strings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rock => "바위",
            Self::Paper => "보",
            Self::Scissors => "가위",
        }
    }
}

/// uniform draw over the three moves
impl Distribution<Move> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        match rng.random_range(0..3) {
            0 => Move::Rock,
            1 => Move::Paper,
            _ => Move::Scissors,
        }
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        rand::rng().random()
    }
}

/// str validation; no trimming, the label must match exactly
impl TryFrom<&str> for Move {
    type Error = ParlorError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or_else(|| ParlorError::InvalidMove(s.to_string()))
    }
}

impl std::str::FromStr for Move {
    type Err = ParlorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn bijective_label() {
        for m in Move::all() {
            assert_eq!(Move::try_from(m.label()), Ok(m));
            assert_eq!(m.to_string().parse::<Move>(), Ok(m));
        }
    }

    #[test]
    fn rejects_noncanonical() {
        for raw in ["", " ", "\t", "가위 ", " 바위", "보자기", "가이", "rock", "R"] {
            assert_eq!(
                Move::try_from(raw),
                Err(ParlorError::InvalidMove(raw.to_string()))
            );
        }
    }

    #[test]
    fn beats_is_a_cycle() {
        for m in Move::all() {
            assert!(m.beats() != m);
            assert!(m.beats().beats().beats() == m);
        }
    }

    #[test]
    fn draws_cover_every_move() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            counts[rng.random::<Move>() as usize] += 1;
        }
        assert!(counts.iter().all(|&n| n > 800), "{:?}", counts);
    }

    #[test]
    fn arbitrary_is_a_move() {
        for _ in 0..32 {
            assert!(Move::all().contains(&Move::random()));
        }
    }
}
