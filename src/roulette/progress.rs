use colored::*;
use std::io::Write;
use std::time::Duration;

/// Receives the cosmetic ticks of a spin.
pub trait Progress {
    /// Called once per tick, `tick` counting from 1 up to `of`.
    fn tick(&mut self, tick: usize, of: usize);
}

/// Silent reporter.
impl Progress for () {
    fn tick(&mut self, _: usize, _: usize) {}
}

/// Prints one line per tick and pauses between them.
///
/// Write failures are logged and skipped; the spin itself never fails.
#[derive(Debug)]
pub struct Spinner<W = std::io::Stdout> {
    delay: Duration,
    out: W,
}

impl Spinner {
    /// Spinner on stdout.
    pub fn new(delay: Duration) -> Self {
        Self::to(std::io::stdout(), delay)
    }
}

impl<W: Write> Spinner<W> {
    pub fn to(out: W, delay: Duration) -> Self {
        Self { delay, out }
    }
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for Spinner<W> {
    fn tick(&mut self, tick: usize, of: usize) {
        let ref mut out = self.out;
        let dots = ".".repeat(tick);
        if let Err(e) = writeln!(out, "{} {} ({}/{})", "룰렛 돌리는 중".dimmed(), dots, tick, of)
            .and_then(|_| out.flush())
        {
            log::debug!("spinner tick {}/{} not shown: {}", tick, of, e);
        }
        std::thread::sleep(self.delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Closed;
    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn prints_each_tick() {
        colored::control::set_override(false);
        let mut spinner = Spinner::to(Vec::new(), Duration::ZERO);
        (1..=3).for_each(|t| spinner.tick(t, 3));
        let text = String::from_utf8(spinner.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().last().unwrap().ends_with("... (3/3)"));
    }

    #[test]
    fn closed_output_is_not_fatal() {
        let mut spinner = Spinner::to(Closed, Duration::ZERO);
        spinner.tick(1, 2);
        spinner.tick(2, 2);
    }
}
