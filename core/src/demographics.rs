//! Randomised population breakdowns
//!
//! A handful of categories get picked from every tier and ranked by an "intensity" drawn from a
//! skew-normal centred on the tier's chance. The ranked categories then receive a descending run
//! of percentage shares, and whatever is left over goes to a capped "other" bucket.
//!
//! All arithmetic happens in integer units of `1 / 10^decimals` percent so the shares always add
//! up to exactly 100%.

use crate::{rng::RandomSource, Category, Error, PopulationTable, Result};

/// Largest supported number of decimal places, keeps every unit count well inside a u32
pub const MAX_DECIMALS: u32 = 4;

/// Label of the catch-all entry that ends every breakdown
pub const OTHER: &str = "other";

const INTENSITY_SCALE: f64 = 0.20;

/// How the number of categories picked from a tier is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Poisson with a rate of `0.25 + 2 * chance`
    #[default]
    Poisson,
    /// Failures before the first success, with success probability `1 - chance`
    Geometric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Decimal places of the reported percentages, 0 for whole percentages
    pub decimals: u32,
    /// Whether the leading category should hold a large majority (60-90%) rather than a
    /// plurality (10-60%)
    pub vast_majority: bool,
    pub selection: Selection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    /// How many categories got picked from each tier, in table order
    pub counts: Vec<(String, usize)>,
    /// Picked categories and their share in units, largest first
    pub shares: Vec<(String, u32)>,
    /// Share of the "other" bucket in units
    pub other: u32,
    /// Largest share "other" was allowed to take, in units
    pub other_cap: u32,
    pub decimals: u32,
}

impl Demographics {
    /// Number of units that make up one percent
    pub fn scale(&self) -> u32 {
        scale(self.decimals)
    }

    /// Sum of every share in units, always `100 * scale`
    pub fn total(&self) -> u32 {
        self.shares.iter().map(|(_, units)| units).sum::<u32>() + self.other
    }

    /// Name and percentage of every entry, "other" last
    pub fn percentages(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        let scale = f64::from(self.scale());
        self.shares
            .iter()
            .map(|(name, units)| (name.as_str(), *units))
            .chain(std::iter::once((OTHER, self.other)))
            .map(move |(name, units)| (name, f64::from(units) / scale))
    }
}

fn scale(decimals: u32) -> u32 {
    10u32.pow(decimals)
}

/// Generates a random population breakdown from the tiers in `table`
///
/// Fails with [`Error::InvalidConfiguration`] if a chance is outside of [0, 1), if every chance
/// is 0, if no tier with a non-zero chance has a category with a non-zero weight, or if more than
/// [`MAX_DECIMALS`] decimals are requested.
pub fn generate<R>(table: &PopulationTable, options: &Options, rng: &mut R) -> Result<Demographics>
where
    R: RandomSource + ?Sized,
{
    validate(table, options)?;

    indent!("generating demographics from {} tiers", table.tiers.len());

    let counts = selection_counts(table, options.selection, rng);
    log!("selection counts {counts:?}");

    let picks = pick_categories(table, &counts, rng);
    log!("picked {picks:?}");

    let partition = if picks.len() == 1 {
        let scale = scale(options.decimals);
        Partition {
            shares: vec![99 * scale],
            other: scale,
            other_cap: scale,
        }
    } else {
        partition(picks.len(), table.pool(), options, rng)
    };

    dedent!("shares {:?}, other {}", partition.shares, partition.other);

    Ok(Demographics {
        counts: table
            .tiers
            .iter()
            .map(|tier| tier.name.clone())
            .zip(counts)
            .collect(),
        shares: picks.into_iter().zip(partition.shares).collect(),
        other: partition.other,
        other_cap: partition.other_cap,
        decimals: options.decimals,
    })
}

fn validate(table: &PopulationTable, options: &Options) -> Result<()> {
    if options.decimals > MAX_DECIMALS {
        return Err(Error::InvalidConfiguration(format!(
            "at most {MAX_DECIMALS} decimals are supported, got {}",
            options.decimals
        )));
    }

    for tier in &table.tiers {
        if !(0.0..1.0).contains(&tier.chance) {
            return Err(Error::InvalidConfiguration(format!(
                "chance of tier {:?} is {}, chances must be in [0, 1) and no chance can be 1",
                tier.name, tier.chance
            )));
        }
    }

    if table.tiers.iter().all(|tier| tier.chance == 0.0) {
        return Err(Error::InvalidConfiguration(
            "every tier has a chance of 0, there is nothing to distribute".into(),
        ));
    }

    if table.pool() == 0 {
        return Err(Error::InvalidConfiguration(
            "no tier has a category with a non-zero weight".into(),
        ));
    }

    // a tier with a chance of 0 never picks under geometric selection
    if !table
        .tiers
        .iter()
        .any(|tier| tier.chance > 0.0 && tier.available() > 0)
    {
        return Err(Error::InvalidConfiguration(
            "no tier with a non-zero chance has a category to pick".into(),
        ));
    }

    Ok(())
}

// Redraws until at least one category is picked overall
fn selection_counts<R>(table: &PopulationTable, selection: Selection, rng: &mut R) -> Vec<usize>
where
    R: RandomSource + ?Sized,
{
    loop {
        let counts: Vec<usize> = table
            .tiers
            .iter()
            .map(|tier| {
                let count = match selection {
                    Selection::Poisson => rng.poisson(0.25 + 2.0 * tier.chance),
                    Selection::Geometric => rng.geometric(1.0 - tier.chance),
                };
                (count as usize).min(tier.available())
            })
            .collect();

        if counts.iter().sum::<usize>() >= 1 {
            return counts;
        }
    }
}

// Maps a chance in [0, 1) to a skew-normal shape, low chances lean right and high chances lean
// left
fn intensity_shape(chance: f64) -> f64 {
    (27.2343 * (-1.4076 * (chance - 0.5)).tan()).round()
}

// Returns the names of the picked categories, highest intensity first
fn pick_categories<R>(table: &PopulationTable, counts: &[usize], rng: &mut R) -> Vec<String>
where
    R: RandomSource + ?Sized,
{
    let mut picks: Vec<(f64, &str)> = Vec::with_capacity(counts.iter().sum());

    for (tier, &count) in table.tiers.iter().zip(counts) {
        let eligible: Vec<&Category> = tier.categories.iter().filter(|c| c.weight > 0).collect();
        let weights: Vec<u32> = eligible.iter().map(|c| c.weight).collect();
        let shape = intensity_shape(tier.chance);

        for idx in rng.choose_weighted(&weights, count) {
            let intensity = rng.skew_normal(tier.chance, INTENSITY_SCALE, shape);
            picks.push((intensity, eligible[idx].name.as_str()));
        }
    }

    // stable, so equal intensities keep table order
    picks.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    picks.into_iter().map(|(_, name)| name.to_owned()).collect()
}

#[derive(Debug)]
struct Partition {
    shares: Vec<u32>,
    other: u32,
    other_cap: u32,
}

// Splits 100% into `count` descending shares plus "other", `pool` is the number of categories
// that could have been picked
fn partition<R>(count: usize, pool: usize, options: &Options, rng: &mut R) -> Partition
where
    R: RandomSource + ?Sized,
{
    debug_assert!(count >= 2);

    let scale = scale(options.decimals);
    let total = 100 * scale;
    let tolerance = 2 * scale;

    let dominant = if options.vast_majority {
        rng.triangular(60.0, 75.0, 90.0)
    } else {
        rng.triangular(10.0, 25.0, 60.0)
    };
    let dominant = ((dominant * f64::from(scale)) as u32).clamp(scale, total - scale);

    let mut shares = Vec::with_capacity(count);
    shares.push(dominant);
    let mut remainder = total - dominant;

    while remainder >= tolerance && shares.len() < count {
        let share = rng.uniform(scale, remainder);
        shares.push(share);
        remainder -= share;
    }
    sort_descending(&mut shares);

    let other_cap = (pool / 3).min(rng.uniform(7, 14) as usize) as u32 * scale;
    log!("drew {} of {count} shares, remainder {remainder}, other cap {other_cap}", shares.len());

    if shares.len() < count {
        split_largest(&mut shares, count, scale, rng);
    }

    if remainder < other_cap {
        return Partition {
            shares,
            other: remainder,
            other_cap,
        };
    }

    // hand the excess over the cap to the two leading shares
    let excess = remainder - other_cap;
    let split = rng.uniform(0, excess);
    let (larger, smaller) = (split.max(excess - split), split.min(excess - split));
    shares[0] += larger;
    match shares.get_mut(1) {
        Some(second) => *second += smaller,
        None => shares[0] += smaller,
    }

    Partition {
        shares,
        other: other_cap,
        other_cap,
    }
}

// Breaks pieces off the current largest share until there are `count` shares
//
// Piece `i` of `n` missing is at most `scale * (n - i)` units, and never empties the share it is
// taken from.
fn split_largest<R>(shares: &mut Vec<u32>, count: usize, scale: u32, rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    let missing = count - shares.len();
    for i in 0..missing {
        let Some(idx) = index_of_max(shares) else {
            return;
        };
        let bound = (scale * (missing - i) as u32)
            .min(shares[idx].saturating_sub(1))
            .max(1);
        let piece = rng.uniform(1, bound).min(shares[idx]);
        shares[idx] -= piece;
        shares.push(piece);
    }
    sort_descending(shares);
}

// first index holding the largest value
fn index_of_max(values: &[u32]) -> Option<usize> {
    let max = values.iter().max()?;
    values.iter().position(|v| v == max)
}

fn sort_descending(values: &mut [u32]) {
    values.sort_unstable_by(|a, b| b.cmp(a));
}
