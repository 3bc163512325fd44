use anyhow::Context as _;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

use ttrpg_tools_core as core;

mod data;

#[derive(Debug, Parser)]
#[command(about = "Random generators for tabletop role-playing games")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Generate the population breakdown of a settlement
    Demographics(DemographicsArgs),

    /// Split 100% between a random number of unnamed groups and "other"
    Split(SplitArgs),

    /// Print die-roll tables of settlement population and level
    Settlements(SettlementsArgs),
}

#[derive(Debug, clap::Args)]
struct RngArgs {
    /// Set seed for the RNG, a random one is used if omitted
    #[arg(long, short)]
    seed: Option<core::Seed>,

    /// Print the seed and inputs to stderr
    #[arg(long)]
    log: bool,
}

impl RngArgs {
    fn rng(&self) -> core::Rng {
        let rng = match self.seed {
            Some(seed) => core::Rng::from_seed(seed),
            None => core::Rng::new(),
        };
        if self.log {
            eprintln!("{} {}", " SEED ".black().on_purple(), rng.initial_seed);
        }
        rng
    }
}

#[derive(Debug, clap::Args)]
struct DemographicsArgs {
    /// JSON file with the tiers to pick from, if omitted the built-in ancestries are used
    #[arg(long, short, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Override the chance of a tier, may be repeated
    #[arg(long = "chance", value_name = "TIER=CHANCE", value_parser = parse_chance)]
    chances: Vec<(String, f64)>,

    /// Number of decimal places in the percentages
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=core::MAX_DECIMALS as i64))]
    decimals: u32,

    /// Let the leading category hold a large majority
    #[arg(long, short)]
    vast_majority: bool,

    /// How the number of categories picked from each tier is drawn
    #[arg(long, value_enum, default_value_t = SelectionArg::Poisson)]
    selection: SelectionArg,

    #[command(flatten)]
    rng: RngArgs,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum SelectionArg {
    Poisson,
    Geometric,
}

impl From<SelectionArg> for core::Selection {
    fn from(selection: SelectionArg) -> Self {
        match selection {
            SelectionArg::Poisson => core::Selection::Poisson,
            SelectionArg::Geometric => core::Selection::Geometric,
        }
    }
}

#[derive(Debug, clap::Args)]
struct SplitArgs {
    /// Let the leading group hold a large majority
    #[arg(long, short)]
    vast_majority: bool,

    #[command(flatten)]
    rng: RngArgs,
}

#[derive(Debug, clap::Args)]
struct SettlementsArgs {
    /// Number of sides of the die the tables are rolled with
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(2..=1000))]
    sides: u32,
}

fn parse_chance(s: &str) -> Result<(String, f64), String> {
    let (tier, chance) = s
        .split_once('=')
        .ok_or_else(|| format!("expected TIER=CHANCE, got {s:?}"))?;
    let chance = chance
        .trim()
        .parse()
        .map_err(|err| format!("invalid chance {chance:?}: {err}"))?;
    Ok((tier.trim().to_owned(), chance))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Demographics(args) => demographics(args),
        Command::Split(args) => split(args),
        Command::Settlements(args) => settlements(args),
    }
}

fn demographics(args: DemographicsArgs) -> anyhow::Result<()> {
    let mut table = match &args.data {
        Some(path) => data::load(path)?,
        None => core::presets::default_ancestries(),
    };

    for (name, chance) in &args.chances {
        let tier = table
            .tier_mut(name)
            .with_context(|| format!("there is no tier named {name:?}"))?;
        tier.chance = *chance;
    }

    if args.rng.log {
        for tier in &table.tiers {
            eprintln!(
                "{} {} (chance {}, {} of {} categories pickable)",
                " TIER ".black().on_blue(),
                tier.name,
                tier.chance,
                tier.available(),
                tier.categories.len()
            );
        }
    }

    let options = core::Options {
        decimals: args.decimals,
        vast_majority: args.vast_majority,
        selection: args.selection.into(),
    };
    let mut rng = args.rng.rng();

    let demographics = core::generate(&table, &options, &mut rng)?;
    print!("{demographics}");

    Ok(())
}

fn split(args: SplitArgs) -> anyhow::Result<()> {
    let mut rng = args.rng.rng();
    let split = core::quick_split(args.vast_majority, &mut rng);
    print!("{split}");
    Ok(())
}

fn settlements(args: SettlementsArgs) -> anyhow::Result<()> {
    for kind in core::SettlementKind::ALL {
        let table = core::settlement_table(kind, args.sides)?;
        println!("{table}");
    }
    Ok(())
}
