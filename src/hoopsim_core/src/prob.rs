use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{SimError, SimResult};

/// A stream of uniform draws in `[0, 1)`.
///
/// Every Bernoulli trial in the engine consumes exactly one draw, so the
/// order of draws is part of the model: per game the opening coin flip,
/// then per possession the shot-type choice, the make/miss trial and, on a
/// miss, the rebound contest.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn next_uniform(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Random source backed by a `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<ChaCha8Rng> {
    /// Reproducible stream: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RngSource::new(ChaCha8Rng::from_entropy())
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => RngSource::seeded(s),
            None => RngSource::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, starting over once the list is exhausted.
///
/// Lets callers rig an exact sequence of outcomes, e.g. `[0.0, 0.99]` makes a
/// 0.5 trial succeed and then fail.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    cursor: usize,
    taken: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<f64>) -> SimResult<Self> {
        if draws.is_empty() {
            return Err(SimError::EmptyScript);
        }
        if let Some((i, &value)) = draws
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..1.0).contains(*v))
        {
            return Err(SimError::InvalidProbability {
                field: format!("draws[{}]", i),
                value,
            });
        }
        Ok(ScriptedSource {
            draws,
            cursor: 0,
            taken: 0,
        })
    }

    /// Number of draws consumed so far
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl RandomSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.draws[self.cursor];
        self.cursor = (self.cursor + 1) % self.draws.len();
        self.taken += 1;
        value
    }
}

/// Return true with probability `p`.
///
/// # Panics
/// If `p` is outside `[0, 1]` or NaN. Configuration is validated on
/// construction, so reaching this with a bad value is a logic error.
pub fn bernoulli_trial<S: RandomSource + ?Sized>(source: &mut S, p: f64) -> bool {
    assert!(
        (0.0..=1.0).contains(&p),
        "probability {} is outside [0, 1]",
        p
    );
    source.next_uniform() < p
}

/// `total / count` as a float.
///
/// # Panics
/// If `count` is zero.
pub fn average(total: u64, count: u64) -> f64 {
    assert!(count > 0, "cannot average over zero samples");
    total as f64 / count as f64
}

/// Shooting percentage in `[0, 100]`; zero attempts is defined as 0.0.
pub fn percentage(made: u64, attempts: u64) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        made as f64 / attempts as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scripted_source_cycles() {
        let mut source = ScriptedSource::new(vec![0.1, 0.2]).unwrap();
        let draws: Vec<f64> = (0..5).map(|_| source.next_uniform()).collect();
        assert_eq!(draws, vec![0.1, 0.2, 0.1, 0.2, 0.1]);
        assert_eq!(source.taken(), 5);
    }

    #[test]
    fn test_scripted_source_rejects_bad_scripts() {
        assert!(matches!(ScriptedSource::new(vec![]), Err(SimError::EmptyScript)));
        assert!(matches!(
            ScriptedSource::new(vec![0.5, 1.0]),
            Err(SimError::InvalidProbability { .. })
        ));
        assert!(ScriptedSource::new(vec![-0.1]).is_err());
    }

    #[test]
    fn test_bernoulli_uses_strict_less_than() {
        let mut source = ScriptedSource::new(vec![0.5]).unwrap();
        assert!(!bernoulli_trial(&mut source, 0.5));
        assert!(bernoulli_trial(&mut source, 0.51));
    }

    #[test]
    #[should_panic(expected = "outside [0, 1]")]
    fn test_bernoulli_rejects_out_of_range() {
        let mut source = RngSource::seeded(1);
        bernoulli_trial(&mut source, 1.5);
    }

    #[test]
    #[should_panic]
    fn test_bernoulli_rejects_nan() {
        let mut source = RngSource::seeded(1);
        bernoulli_trial(&mut source, f64::NAN);
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_uniform().to_bits(), b.next_uniform().to_bits());
        }
    }

    #[test]
    fn test_bernoulli_frequency_near_p() {
        let mut source = RngSource::seeded(7);
        let hits = (0..20_000).filter(|_| bernoulli_trial(&mut source, 0.3)).count();
        let freq = hits as f64 / 20_000.0;
        assert!((freq - 0.3).abs() < 0.02, "frequency {} too far from 0.3", freq);
    }

    #[test]
    fn test_average_and_percentage() {
        assert!((average(7, 2) - 3.5).abs() < 1e-12);
        assert_eq!(percentage(0, 0), 0.0);
        assert!((percentage(1, 4) - 25.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "zero samples")]
    fn test_average_rejects_zero_count() {
        average(10, 0);
    }

    proptest! {
        #[test]
        fn prop_zero_probability_never_succeeds(seed in any::<u64>()) {
            let mut source = RngSource::seeded(seed);
            for _ in 0..200 {
                prop_assert!(!bernoulli_trial(&mut source, 0.0));
            }
        }

        #[test]
        fn prop_certain_probability_always_succeeds(seed in any::<u64>()) {
            let mut source = RngSource::seeded(seed);
            for _ in 0..200 {
                prop_assert!(bernoulli_trial(&mut source, 1.0));
            }
        }

        #[test]
        fn prop_percentage_bounded(attempts in 0u64..10_000, frac in 0.0f64..=1.0) {
            let made = (attempts as f64 * frac) as u64;
            let pct = percentage(made, attempts);
            prop_assert!((0.0..=100.0).contains(&pct));
        }
    }
}
