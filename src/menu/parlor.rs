use super::*;
use crate::hand::Duel;
use crate::roulette;
use crate::roulette::Progress;
use crate::roulette::Wheel;
use rand::Rng;
use std::ops::ControlFlow;

const SELECT: &str = "번호를 선택하세요";
const THROW: &str = "가위, 바위, 보 중 하나를 입력하세요";
const ITEMS: &str = "항목들을 쉼표(,)로 구분해서 입력하세요";

/// Single-threaded menu loop over a [`Console`].
///
/// One state, awaiting a selection:
/// - "1" plays a rock-paper-scissors round
/// - "2" spins the roulette over a comma-separated line
/// - "3" says goodbye and stops
/// - anything else is reported and re-prompted
///
/// Bad round input never ends the loop. Exhausted input does, silently.
pub struct Parlor<C, R, P> {
    console: C,
    rng: R,
    progress: P,
    wheel: Wheel,
}

impl<C, R, P> Parlor<C, R, P>
where
    C: Console,
    R: Rng,
    P: Progress,
{
    pub fn new(console: C, rng: R, progress: P) -> Self {
        Self {
            console,
            rng,
            progress,
            wheel: Wheel::default(),
        }
    }
    pub fn with_wheel(self, wheel: Wheel) -> Self {
        Self { wheel, ..self }
    }
    pub fn console(&self) -> &C {
        &self.console
    }
    pub fn into_console(self) -> C {
        self.console
    }

    /// Loop until the user leaves or input runs out.
    pub fn run(&mut self) -> anyhow::Result<()> {
        log::info!("parlor open");
        while self.step()?.is_continue() {}
        log::info!("parlor closed");
        Ok(())
    }

    /// One iteration: show the menu, read a selection, dispatch it.
    pub fn step(&mut self) -> anyhow::Result<ControlFlow<()>> {
        self.console.notify(&Event::Menu)?;
        let Some(selection) = self.console.ask(SELECT)? else {
            return Ok(self.exhausted());
        };
        match selection.trim() {
            "1" => self.duel(),
            "2" => self.spin(),
            "3" => {
                self.console.notify(&Event::Farewell)?;
                Ok(ControlFlow::Break(()))
            }
            other => {
                log::warn!("unknown selection {:?}", other);
                self.console.notify(&Event::Unknown(other.to_string()))?;
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    fn duel(&mut self) -> anyhow::Result<ControlFlow<()>> {
        let Some(raw) = self.console.ask(THROW)? else {
            return Ok(self.exhausted());
        };
        let event = match Duel::play(&raw, &mut self.rng) {
            Ok(duel) => {
                log::info!("{:?} vs {:?}: {:?}", duel.user, duel.computer, duel.outcome);
                Event::Duel(duel)
            }
            Err(e) => {
                log::warn!("round aborted: {}", e);
                Event::Rejected(e)
            }
        };
        self.console.notify(&event)?;
        Ok(ControlFlow::Continue(()))
    }

    fn spin(&mut self) -> anyhow::Result<ControlFlow<()>> {
        let Some(raw) = self.console.ask(ITEMS)? else {
            return Ok(self.exhausted());
        };
        let items = roulette::items(&raw);
        let event = match self.wheel.spin(&items, &mut self.rng, &mut self.progress) {
            Ok(pick) => Event::Picked(pick.to_string()),
            Err(e) => {
                log::warn!("spin aborted: {}", e);
                Event::Rejected(e)
            }
        };
        self.console.notify(&event)?;
        Ok(ControlFlow::Continue(()))
    }

    fn exhausted(&self) -> ControlFlow<()> {
        log::info!("input exhausted, leaving");
        ControlFlow::Break(())
    }
}
