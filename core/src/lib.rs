#[cfg(feature = "logging")]
#[macro_use]
mod logging;

#[cfg(not(feature = "logging"))]
#[macro_use]
#[path = "logging_noop.rs"]
mod logging;

mod demographics;
mod display;
mod quick_split;
mod rng;
mod settlement;

pub mod presets;

pub use demographics::{generate, Demographics, Options, Selection, MAX_DECIMALS, OTHER};
pub use quick_split::{quick_split, QuickSplit};
pub use rng::{RandomSource, Rng, Seed};
pub use settlement::{settlement_table, SettlementKind, SettlementRow, SettlementTable};

/*****************************************************************************************
 * Error Types
 */

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidConfiguration(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidConfiguration(reason) => {
                write!(f, "Invalid configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}

/*****************************************************************************************
 * Common Types
 */

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Category {
    pub name: String,
    /// Relative odds of being picked within its tier, 0 means never
    pub weight: u32,
}

impl Category {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// A rarity grouping of categories
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tier {
    pub name: String,
    /// In the range [0, 1), controls both how many categories get picked from this tier and how
    /// high they tend to rank
    pub chance: f64,
    pub categories: Vec<Category>,
}

impl Tier {
    pub fn new(name: impl Into<String>, chance: f64) -> Self {
        Self {
            name: name.into(),
            chance,
            categories: Vec::new(),
        }
    }

    pub fn category(mut self, name: impl Into<String>, weight: u32) -> Self {
        self.categories.push(Category::new(name, weight));
        self
    }

    /// Number of categories that can actually be picked
    pub fn available(&self) -> usize {
        self.categories.iter().filter(|c| c.weight > 0).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PopulationTable {
    pub tiers: Vec<Tier>,
}

impl PopulationTable {
    pub fn new(tiers: Vec<Tier>) -> Self {
        Self { tiers }
    }

    /// Total number of pickable categories across every tier
    pub fn pool(&self) -> usize {
        self.tiers.iter().map(Tier::available).sum()
    }

    pub fn tier_mut(&mut self, name: &str) -> Option<&mut Tier> {
        self.tiers
            .iter_mut()
            .find(|tier| tier.name.eq_ignore_ascii_case(name))
    }
}
