use super::*;
use crate::ParlorError;
use rand::Rng;

/// One finished round of rock-paper-scissors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duel {
    pub user: Move,
    pub computer: Move,
    pub outcome: Outcome,
}

impl Duel {
    /// Validate the raw line, then let the house draw and settle the round.
    /// Invalid input aborts the round before anything is drawn.
    pub fn play<R: Rng + ?Sized>(raw: &str, rng: &mut R) -> Result<Self, ParlorError> {
        let user = Move::try_from(raw)?;
        let computer = rng.random::<Move>();
        log::debug!("house drew {:?}", computer);
        Ok(Self::from((user, computer)))
    }
}

impl From<(Move, Move)> for Duel {
    fn from((user, computer): (Move, Move)) -> Self {
        Self {
            user,
            computer,
            outcome: resolve(user, computer),
        }
    }
}

/// computer first, then user, then the verdict
impl std::fmt::Display for Duel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "컴퓨터: {}", self.computer)?;
        writeln!(f, "사용자: {}", self.user)?;
        write!(f, "{}", self.outcome)
    }
}
