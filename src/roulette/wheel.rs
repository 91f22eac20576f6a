use super::Progress;
use crate::ParlorError;
use rand::Rng;

/// Uniform picker with a fixed-length cosmetic spin.
#[derive(Debug, Clone, Copy)]
pub struct Wheel {
    ticks: usize,
}

impl Wheel {
    pub fn new(ticks: usize) -> Self {
        Self { ticks }
    }
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Spin, then pick one label uniformly by position.
    ///
    /// Every slot is equiprobable, so a label listed twice is twice as likely.
    /// An empty slice fails before any tick or draw.
    pub fn spin<'a, R, P>(
        &self,
        items: &'a [String],
        rng: &mut R,
        progress: &mut P,
    ) -> Result<&'a str, ParlorError>
    where
        R: Rng + ?Sized,
        P: Progress + ?Sized,
    {
        if items.is_empty() {
            return Err(ParlorError::EmptySelection);
        }
        (1..=self.ticks).for_each(|t| progress.tick(t, self.ticks));
        let pick = items[rng.random_range(0..items.len())].as_str();
        log::info!("picked {:?} out of {} items", pick, items.len());
        Ok(pick)
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new(crate::SPIN_TICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[derive(Default)]
    struct Counter(Vec<(usize, usize)>);
    impl Progress for Counter {
        fn tick(&mut self, tick: usize, of: usize) {
            self.0.push((tick, of));
        }
    }

    fn labels(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn singleton_always_picked() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let items = labels(&["치킨"]);
        for _ in 0..100 {
            assert_eq!(Wheel::new(0).spin(&items, rng, &mut ()), Ok("치킨"));
        }
    }

    #[test]
    fn empty_fails_without_ticks() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let ref mut counter = Counter::default();
        let result = Wheel::new(5).spin(&[], rng, counter);
        assert_eq!(result, Err(ParlorError::EmptySelection));
        assert!(counter.0.is_empty());
    }

    #[test]
    fn ticks_before_pick() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let ref mut counter = Counter::default();
        let items = labels(&["a", "b"]);
        let wheel = Wheel::new(3);
        assert!(wheel.spin(&items, rng, counter).is_ok());
        assert_eq!(counter.0.len(), wheel.ticks());
        assert_eq!(counter.0, [(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn empty_label_is_selectable() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let items = labels(&[""]);
        assert_eq!(Wheel::default().spin(&items, rng, &mut ()), Ok(""));
    }

    #[test]
    fn duplicates_weigh_proportionally() {
        const N: usize = 10000;
        let ref mut rng = SmallRng::seed_from_u64(42);
        let items = labels(&["A", "A", "B"]);
        let wheel = Wheel::new(0);
        let a = (0..N)
            .filter(|_| wheel.spin(&items, rng, &mut ()) == Ok("A"))
            .count();
        let b = N - a;
        let ratio = a as f32 / b as f32;
        assert!((1.8..2.2).contains(&ratio), "A:B = {}:{}", a, b);
    }
}
