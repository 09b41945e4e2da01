use crate::Bid;
use crate::cards::hand::Hand;
use crate::cards::mode::Mode;
use crate::cards::strength::Strength;
use anyhow::Context;
use std::str::FromStr;

/// One input line: a hand and the bid staked on it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Record {
    hand: Hand,
    bid: Bid,
}

impl Record {
    pub fn hand(&self) -> Hand {
        self.hand
    }
    pub fn bid(&self) -> Bid {
        self.bid
    }
    pub fn strength(&self, mode: Mode) -> Strength {
        Strength::from((self.hand, mode))
    }
}

impl From<(Hand, Bid)> for Record {
    fn from((hand, bid): (Hand, Bid)) -> Self {
        Self { hand, bid }
    }
}

/// "32T3K 765"
impl FromStr for Record {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hand, bid) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow::anyhow!("expected `<hand> <bid>`"))?;
        let hand = Hand::try_from(hand).map_err(anyhow::Error::msg)?;
        let bid = bid
            .parse::<Bid>()
            .with_context(|| format!("invalid bid: {}", bid))?;
        Ok(Self { hand, bid })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.hand, self.bid)
    }
}
