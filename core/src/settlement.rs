//! Die-roll tables for settlement sizes
//!
//! Each settlement kind spans a population range and a level range. Rolling the die picks a row;
//! rows are spaced logarithmically so low rolls cover small, closely spaced populations and high
//! rolls cover the large ones.

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementKind {
    Hamlet,
    Village,
    Town,
    City,
    Metropolis,
}

impl SettlementKind {
    pub const ALL: [SettlementKind; 5] = [
        SettlementKind::Hamlet,
        SettlementKind::Village,
        SettlementKind::Town,
        SettlementKind::City,
        SettlementKind::Metropolis,
    ];

    pub fn population_range(self) -> (u64, u64) {
        match self {
            SettlementKind::Hamlet => (2, 25),
            SettlementKind::Village => (25, 250),
            SettlementKind::Town => (250, 2_500),
            SettlementKind::City => (2_500, 25_000),
            SettlementKind::Metropolis => (25_000, 250_000),
        }
    }

    pub fn level_range(self) -> (u32, u32) {
        match self {
            SettlementKind::Hamlet => (0, 0),
            SettlementKind::Village => (0, 1),
            SettlementKind::Town => (2, 4),
            SettlementKind::City => (5, 7),
            SettlementKind::Metropolis => (8, 20),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementRow {
    pub roll: u32,
    pub min_population: u64,
    pub max_population: u64,
    pub level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementTable {
    pub kind: SettlementKind,
    pub sides: u32,
    pub rows: Vec<SettlementRow>,
}

/// Builds the table for rolling a `sides` sided die, which needs at least 2 sides
pub fn settlement_table(kind: SettlementKind, sides: u32) -> Result<SettlementTable> {
    if sides < 2 {
        return Err(Error::InvalidConfiguration(format!(
            "settlement tables need a die with at least 2 sides, got {sides}"
        )));
    }
    let rows = sides as usize;

    let (min_population, max_population) = kind.population_range();
    let mut bounds: Vec<u64> = log_spaced(min_population as f64, max_population as f64, rows + 1)
        .map(|x| x.round() as u64)
        .collect();
    bounds[0] = min_population;
    bounds[rows] = max_population;

    let levels = level_steps(kind.level_range(), rows);

    let rows = (0..rows)
        .map(|idx| {
            let min_population = bounds[idx];
            let max_population = if idx == rows - 1 {
                bounds[idx + 1]
            } else {
                // neighbouring bounds can round to the same value at the low end
                (bounds[idx + 1] - 1).max(min_population)
            };
            SettlementRow {
                roll: idx as u32 + 1,
                min_population,
                max_population,
                level: levels[idx],
            }
        })
        .collect();

    Ok(SettlementTable { kind, sides, rows })
}

// `count` levels spread logarithmically over the range, offset by one so a level of 0 works
fn level_steps((min, max): (u32, u32), count: usize) -> Vec<u32> {
    if min == max {
        return vec![min; count];
    }

    let mut levels: Vec<u32> = log_spaced(f64::from(min + 1), f64::from(max + 1), count)
        .map(|x| x.round() as u32 - 1)
        .collect();
    levels[0] = min;
    levels[count - 1] = max;
    levels
}

// `count` points evenly spaced in log space from `start` to `end` inclusive
fn log_spaced(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    debug_assert!(count >= 2);
    let (start, end) = (start.ln(), end.ln());
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(move |i| (start + step * i as f64).exp())
}
