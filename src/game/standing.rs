use super::record::Record;
use crate::Bid;
use crate::cards::evaluator::Evaluator;
use crate::cards::mode::Mode;
use crate::cards::strength::Strength;

/// A record's place in the final ordering. Rank 1 is the weakest hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    rank: u64,
    mode: Mode,
    record: Record,
    strength: Strength,
}

impl Standing {
    pub fn rank(&self) -> u64 {
        self.rank
    }
    pub fn record(&self) -> Record {
        self.record
    }
    pub fn strength(&self) -> Strength {
        self.strength
    }
    /// rank × bid, or None if that overflows a Bid
    pub fn winnings(&self) -> Option<Bid> {
        self.rank.checked_mul(self.record.bid())
    }
}

impl From<(u64, Mode, Record, Strength)> for Standing {
    fn from((rank, mode, record, strength): (u64, Mode, Record, Strength)) -> Self {
        Self {
            rank,
            mode,
            record,
            strength,
        }
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>5}. {} -> {} {} x {:<6} = {}",
            self.rank,
            self.record.hand(),
            Evaluator::from(self.record.hand()).find_substitution(self.mode),
            self.strength.category(),
            self.record.bid(),
            self.winnings()
                .map_or_else(|| "overflow".to_string(), |won| won.to_string())
        )
    }
}
