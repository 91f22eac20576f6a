/// Recoverable failures of a single round.
///
/// Neither kind ends the session: the menu reports it and re-prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParlorError {
    /// Raw move input matched none of the three canonical labels.
    InvalidMove(String),
    /// The roulette was asked to pick from nothing.
    EmptySelection,
}

impl std::fmt::Display for ParlorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMove(s) => write!(f, "잘못 입력했습니다: {:?}", s),
            Self::EmptySelection => write!(f, "고를 항목이 없습니다"),
        }
    }
}

impl std::error::Error for ParlorError {}
