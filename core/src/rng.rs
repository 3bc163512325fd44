use rand::{thread_rng, Rng as _, SeedableRng as _};
use rand_distr::{Distribution, Geometric, Poisson, SkewNormal, Triangular};

pub type Seed = u64;

/// Every random draw the generators make goes through this trait so that a run can be replayed
/// from a seed, or scripted outright in tests
pub trait RandomSource {
    /// Uniform integer in `low..=high`
    fn uniform(&mut self, low: u32, high: u32) -> u32;

    fn poisson(&mut self, rate: f64) -> u32;

    /// Number of failures before the first success, where each trial succeeds with probability
    /// `p`
    fn geometric(&mut self, p: f64) -> u32;

    fn skew_normal(&mut self, location: f64, scale: f64, shape: f64) -> f64;

    fn triangular(&mut self, min: f64, mode: f64, max: f64) -> f64;

    /// Picks `amount` distinct indices into `weights`, each pick weighted by what's left
    ///
    /// `amount` must not exceed the number of non-zero weights
    fn choose_weighted(&mut self, weights: &[u32], amount: usize) -> Vec<usize>;
}

// Wrapper around a rand random number generator that keeps track of the initial seed
#[derive(Debug, Clone)]
pub struct Rng {
    pub initial_seed: Seed,
    gen: rand_pcg::Pcg32,
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng {
    pub fn new() -> Self {
        let seed = thread_rng().gen();
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self {
            initial_seed: seed,
            gen: rand_pcg::Pcg32::seed_from_u64(seed),
        }
    }
}

// The distribution parameters are checked by the callers, so a failure to construct one is a bug
impl RandomSource for Rng {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        debug_assert!(low <= high, "empty range {low}..={high}");
        self.gen.gen_range(low..=high)
    }

    fn poisson(&mut self, rate: f64) -> u32 {
        let dist = Poisson::new(rate).expect("poisson rate should be positive and finite");
        let value: f64 = dist.sample(&mut self.gen);
        value as u32
    }

    fn geometric(&mut self, p: f64) -> u32 {
        let dist = Geometric::new(p).expect("geometric probability should be in [0, 1]");
        dist.sample(&mut self.gen).min(u64::from(u32::MAX)) as u32
    }

    fn skew_normal(&mut self, location: f64, scale: f64, shape: f64) -> f64 {
        SkewNormal::new(location, scale, shape)
            .expect("skew normal parameters should be finite with a positive scale")
            .sample(&mut self.gen)
    }

    fn triangular(&mut self, min: f64, mode: f64, max: f64) -> f64 {
        Triangular::new(min, max, mode)
            .expect("triangular mode should lie within min..=max")
            .sample(&mut self.gen)
    }

    fn choose_weighted(&mut self, weights: &[u32], amount: usize) -> Vec<usize> {
        debug_assert!(amount <= weights.iter().filter(|&&w| w > 0).count());
        rand::seq::index::sample_weighted(
            &mut self.gen,
            weights.len(),
            |idx| f64::from(weights[idx]),
            amount,
        )
        .expect("integer weights are never negative")
        .into_vec()
    }
}

#[cfg(test)]
pub(crate) use scripted::Scripted;


#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn same_seed_same_draws() {
        let mut a = Rng::from_seed(0xC0FFEE);
        let mut b = Rng::from_seed(0xC0FFEE);
        for _ in 0..100 {
            pretty_assertions::assert_eq!(a.uniform(0, 1000), b.uniform(0, 1000));
            pretty_assertions::assert_eq!(a.poisson(1.65), b.poisson(1.65));
            pretty_assertions::assert_eq!(
                a.skew_normal(0.7, 0.2, -8.).to_bits(),
                b.skew_normal(0.7, 0.2, -8.).to_bits()
            );
        }
    }

    #[test_case(0, 0)]
    #[test_case(7, 14)]
    #[test_case(1, 100)]
    fn uniform_stays_in_range(low: u32, high: u32) {
        let mut rng = Rng::from_seed(7);
        for _ in 0..1000 {
            let value = rng.uniform(low, high);
            assert!((low..=high).contains(&value), "{value} outside {low}..={high}");
        }
    }

    #[test]
    fn triangular_stays_in_range() {
        let mut rng = Rng::from_seed(11);
        for _ in 0..1000 {
            let value = rng.triangular(10., 25., 60.);
            assert!((10. ..=60.).contains(&value), "{value} outside 10..=60");
        }
    }

    #[test]
    fn choose_weighted_picks_distinct_non_zero_indices() {
        let weights = [3, 0, 1, 5, 0, 2];
        let mut rng = Rng::from_seed(3);
        for _ in 0..200 {
            let mut picks = rng.choose_weighted(&weights, 4);
            picks.sort_unstable();
            pretty_assertions::assert_eq!(picks, vec![0, 2, 3, 5]);
        }
    }

    #[test]
    fn choose_weighted_nothing() {
        let mut rng = Rng::from_seed(3);
        assert!(rng.choose_weighted(&[], 0).is_empty());
    }

    #[test]
    fn scripted_clamps_integer_draws() {
        let mut rng = Scripted::new([50., 0.]);
        pretty_assertions::assert_eq!(rng.uniform(7, 14), 14);
        pretty_assertions::assert_eq!(rng.uniform(1, 3), 1);
        assert!(rng.is_exhausted());
    }
}
