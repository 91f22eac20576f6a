use crate::ParlorError;
use crate::hand::Duel;
use colored::*;

/// Everything the menu loop reports to its console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Numbered options, rendered once per iteration.
    Menu,
    /// A settled rock-paper-scissors round.
    Duel(Duel),
    /// The roulette landed on this label.
    Picked(String),
    /// A round was aborted by bad input.
    Rejected(ParlorError),
    /// The menu selection matched no option.
    Unknown(String),
    /// The user chose to leave.
    Farewell,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Menu => {
                writeln!(f, "{}", "===== 미니 게임 =====".bold())?;
                writeln!(f, "1. 가위바위보")?;
                writeln!(f, "2. 룰렛 돌리기")?;
                write!(f, "3. 종료")
            }
            Event::Duel(duel) => write!(f, "{}", duel),
            Event::Picked(label) => write!(f, "결과: {}", label.as_str().cyan()),
            Event::Rejected(err) => write!(f, "{}", err.to_string().red()),
            Event::Unknown(s) => write!(f, "{} {:?}", "잘못된 선택입니다:".red(), s),
            Event::Farewell => write!(f, "게임을 종료합니다. 안녕히 가세요!"),
        }
    }
}
