use super::record::Record;
use super::standing::Standing;
use crate::Bid;
use crate::cards::mode::Mode;
use crate::cards::strength::Strength;
use anyhow::Context;
use std::path::Path;
use std::str::FromStr;

/// Every record read from one input, in file order.
///
/// Ranking is recomputed per Mode; the records themselves never change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger(Vec<Record>);

impl Ledger {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let ledger = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?
            .parse::<Self>()
            .with_context(|| format!("parse {}", path.display()))?;
        log::info!("loaded {} records from {}", ledger.len(), path.display());
        Ok(ledger)
    }
    pub fn records(&self) -> &[Record] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// records sorted weakest first, ranked 1..=N.
    /// the sort is stable, so equal hands keep file order.
    pub fn standings(&self, mode: Mode) -> Vec<Standing> {
        let mut ranked = self
            .strengths(mode)
            .into_iter()
            .zip(self.0.iter().copied())
            .collect::<Vec<(Strength, Record)>>();
        ranked.sort_by_key(|(strength, _)| *strength);
        ranked
            .into_iter()
            .enumerate()
            .map(|(i, (strength, record))| Standing::from((i as u64 + 1, mode, record, strength)))
            .collect()
    }

    /// Σ bid × rank. errors instead of wrapping when the total outgrows a Bid.
    pub fn winnings(&self, mode: Mode) -> anyhow::Result<Bid> {
        let standings = self.standings(mode);
        log::debug!("{} standings under {} rules", standings.len(), mode);
        standings
            .iter()
            .inspect(|standing| log::debug!("{}", standing))
            .try_fold(0 as Bid, |total, standing| {
                standing
                    .winnings()
                    .and_then(|won| total.checked_add(won))
                    .with_context(|| format!("winnings overflow at rank {}", standing.rank()))
            })
    }

    #[cfg(feature = "server")]
    fn strengths(&self, mode: Mode) -> Vec<Strength> {
        use rayon::iter::IntoParallelRefIterator;
        use rayon::iter::ParallelIterator;
        self.0.par_iter().map(|r| r.strength(mode)).collect()
    }
    #[cfg(not(feature = "server"))]
    fn strengths(&self, mode: Mode) -> Vec<Strength> {
        self.0.iter().map(|r| r.strength(mode)).collect()
    }
}

impl From<Vec<Record>> for Ledger {
    fn from(records: Vec<Record>) -> Self {
        Self(records)
    }
}

/// one record per non-blank line. the first bad line aborts the parse.
impl FromStr for Ledger {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                line.parse::<Record>()
                    .with_context(|| format!("line {}: {:?}", i + 1, line))
            })
            .collect::<anyhow::Result<Vec<Record>>>()
            .map(Self)
    }
}
