//! Untiered percentage splits
//!
//! Splits 100% between 1 to 8 unnamed groups plus "other", for when there are no categories to
//! draw from and only the shape of the breakdown matters.

use crate::rng::RandomSource;

const MAX_GROUPS: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickSplit {
    /// Percentage of every group, roughly largest first
    pub shares: Vec<u32>,
    pub other: u32,
    /// Largest percentage "other" was allowed to take
    pub other_cap: u32,
}

impl QuickSplit {
    pub fn total(&self) -> u32 {
        self.shares.iter().sum::<u32>() + self.other
    }
}

pub fn quick_split<R>(vast_majority: bool, rng: &mut R) -> QuickSplit
where
    R: RandomSource + ?Sized,
{
    let groups = rng.uniform(1, MAX_GROUPS) as usize;
    let other_cap = rng.uniform(8, 15);

    // one weight per group plus one for other
    let modes: Vec<u32> = (0..=groups).map(|_| rng.uniform(1, 100)).collect();
    let mut weights: Vec<f64> = modes
        .into_iter()
        .map(|mode| rng.triangular(1.0, f64::from(mode), 100.0).round())
        .collect();

    if vast_majority {
        let (idx, _) = weights
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |max, (idx, &w)| if w > max.1 { (idx, w) } else { max });
        weights[idx] *= (groups + 1) as f64;
    }

    let sum: f64 = weights.iter().sum();
    let mut percents: Vec<i64> = weights
        .iter()
        .map(|w| (w / sum * 100.0).round() as i64)
        .collect();
    percents.sort_unstable_by(|a, b| b.cmp(a));

    // rounding error goes to the largest
    percents[0] += 100 - percents.iter().sum::<i64>();

    let cap = i64::from(other_cap);
    let last = percents.len() - 1;
    if percents[last - 1] < cap && rng.uniform(0, 1) == 1 {
        percents.swap(last - 1, last);
    }

    if percents[last] >= cap {
        let excess = (percents[last] - cap) as usize;
        for i in 0..excess {
            percents[i % groups] += 1;
        }
        percents[last] = cap;
    }

    let other = percents.pop().unwrap_or_default() as u32;
    QuickSplit {
        shares: percents.into_iter().map(|p| p.max(0) as u32).collect(),
        other,
        other_cap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{Rng, Scripted};
    use test_case::test_case;

    #[test_case(false, [1., 1., 1.], [50., 30., 20.] => QuickSplit { shares: vec![55, 35], other: 10, other_cap: 10 })]
    #[test_case(true, [1., 1., 1.], [50., 30., 20.] => QuickSplit { shares: vec![75, 15], other: 10, other_cap: 10 })]
    #[test_case(false, [1., 1., 1.], [20., 20., 60.] => QuickSplit { shares: vec![65, 25], other: 10, other_cap: 10 })]
    fn two_groups(vast_majority: bool, modes: [f64; 3], weights: [f64; 3]) -> QuickSplit {
        let mut values = vec![2., 10.];
        values.extend(modes);
        values.extend(weights);
        let mut rng = Scripted::new(values);
        quick_split(vast_majority, &mut rng)
    }

    #[test]
    fn swaps_a_small_second_last_with_other() {
        // 50 / 43 / 5 / 2 with a cap of 8, coin flip says swap
        let values = [3., 8., 1., 1., 1., 1., 50., 43., 5., 2., 1.];
        let split = quick_split(false, &mut Scripted::new(values));
        pretty_assertions::assert_eq!(split.shares, vec![50, 43, 2]);
        pretty_assertions::assert_eq!(split.other, 5);
    }

    #[test]
    fn holds_its_invariants() {
        for seed in 0..2000 {
            for vast_majority in [false, true] {
                let split = quick_split(vast_majority, &mut Rng::from_seed(seed));
                pretty_assertions::assert_eq!(split.total(), 100, "seed {seed}");
                assert!(split.other <= split.other_cap, "seed {seed}: {split:?}");
                assert!((1..=8).contains(&split.shares.len()), "seed {seed}");
                assert!((8..=15).contains(&split.other_cap), "seed {seed}");
            }
        }
    }
}
