//! Plain text reports for everything the generators produce

use crate::{Demographics, QuickSplit, SettlementKind, SettlementTable, OTHER};
use std::fmt::Display;

// Joins items as "a", "a and b" or "a, b, and c"
struct DisplaySentence<'a, T>(&'a [T]);

impl<'a, T> Display for DisplaySentence<'a, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self.0.len();
        for (idx, item) in self.0.iter().enumerate() {
            match (len, idx) {
                (_, 0) => {}
                (2, 1) => write!(f, " and ")?,
                (_, idx) if idx == len - 1 => write!(f, ", and ")?,
                _ => write!(f, ", ")?,
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

struct TierCount<'a>(&'a str, usize);

impl<'a> Display for TierCount<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.1, self.0.to_lowercase())
    }
}

fn write_percent_line(
    f: &mut std::fmt::Formatter<'_>,
    percent: f64,
    decimals: usize,
    name: &str,
) -> std::fmt::Result {
    // room for two integer digits, plus the decimal point when there are decimals
    let width = if decimals > 0 { 3 + decimals } else { 2 };
    writeln!(f, "{percent:>width$.decimals$}%: {name}")
}

impl Display for Demographics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: Vec<_> = self
            .counts
            .iter()
            .map(|(tier, count)| TierCount(tier, *count))
            .collect();
        writeln!(f, "Picked {}", DisplaySentence(&counts))?;

        for (name, percent) in self.percentages() {
            write_percent_line(f, percent, self.decimals as usize, name)?;
        }
        Ok(())
    }
}

impl Display for QuickSplit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, share) in self.shares.iter().enumerate() {
            let name = format!("group {}", idx + 1);
            write_percent_line(f, f64::from(*share), 0, &name)?;
        }
        write_percent_line(f, f64::from(self.other), 0, OTHER)
    }
}

impl Display for SettlementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SettlementKind::Hamlet => "Hamlet",
            SettlementKind::Village => "Village",
            SettlementKind::Town => "Town",
            SettlementKind::City => "City",
            SettlementKind::Metropolis => "Metropolis",
        };
        // pad so kinds line up when given a width
        f.pad(name)
    }
}

impl Display for SettlementTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let roll_header = format!("d{}", self.sides);
        let roll_width = roll_header.len().max(self.sides.to_string().len());
        let population_width = self
            .rows
            .iter()
            .map(|row| format!("{}-{}", row.min_population, row.max_population).len())
            .max()
            .unwrap_or_default()
            .max("Population".len());

        writeln!(f, "{} population", self.kind)?;
        writeln!(
            f,
            "{roll_header:>roll_width$}  {:<population_width$}  Level",
            "Population"
        )?;
        for row in &self.rows {
            let population = format!("{}-{}", row.min_population, row.max_population);
            writeln!(
                f,
                "{:>roll_width$}  {population:<population_width$}  {:>5}",
                row.roll, row.level
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn assert_eq<T, U>(expected: T) -> impl Fn(U)
    where
        T: std::fmt::Debug,
        U: PartialEq<T> + std::fmt::Debug,
    {
        move |actual| pretty_assertions::assert_eq!(actual, expected)
    }

    #[test_case(&[] => using assert_eq(""))]
    #[test_case(&["a"] => using assert_eq("a"))]
    #[test_case(&["a", "b"] => using assert_eq("a and b"))]
    #[test_case(&["a", "b", "c"] => using assert_eq("a, b, and c"))]
    #[test_case(&["a", "b", "c", "d"] => using assert_eq("a, b, c, and d"))]
    fn sentence(items: &[&str]) -> String {
        DisplaySentence(items).to_string()
    }

    #[test]
    fn demographics() {
        let demographics = Demographics {
            counts: vec![
                ("Common".to_owned(), 2),
                ("Uncommon".to_owned(), 1),
                ("Rare".to_owned(), 0),
            ],
            shares: vec![
                ("human".to_owned(), 61),
                ("elf".to_owned(), 30),
                ("kitsune".to_owned(), 1),
            ],
            other: 8,
            other_cap: 8,
            decimals: 0,
        };
        pretty_assertions::assert_eq!(
            demographics.to_string(),
            concat!(
                "Picked 2 common, 1 uncommon, and 0 rare\n",
                "61%: human\n",
                "30%: elf\n",
                " 1%: kitsune\n",
                " 8%: other\n",
            )
        );
    }

    #[test]
    fn demographics_with_decimals() {
        let demographics = Demographics {
            counts: vec![("Common".to_owned(), 2)],
            shares: vec![("f".to_owned(), 579), ("e".to_owned(), 401)],
            other: 20,
            other_cap: 20,
            decimals: 1,
        };
        pretty_assertions::assert_eq!(
            demographics.to_string(),
            "Picked 2 common\n57.9%: f\n40.1%: e\n 2.0%: other\n"
        );
    }

    #[test]
    fn quick_split() {
        let split = QuickSplit {
            shares: vec![55, 35],
            other: 10,
            other_cap: 10,
        };
        pretty_assertions::assert_eq!(split.to_string(), "55%: group 1\n35%: group 2\n10%: other\n");
    }

    #[test]
    fn settlement_table() {
        let table = crate::settlement_table(SettlementKind::Town, 4).unwrap();
        pretty_assertions::assert_eq!(
            table.to_string(),
            concat!(
                "Town population\n",
                "d4  Population  Level\n",
                " 1  250-444         2\n",
                " 2  445-790         3\n",
                " 3  791-1405        3\n",
                " 4  1406-2500       4\n",
            )
        );
    }
}
