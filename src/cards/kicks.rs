use super::card::Card;
use super::hand::Hand;
use super::mode::Mode;
use crate::HAND_SIZE;

/// A hand's kicker cards.
///
/// The strength of each ORIGINAL card in seat order, under the same Mode
/// used to categorize the hand. Derived Ord compares left to right, so
/// the first unequal position decides.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers([u8; HAND_SIZE]);

impl From<(Hand, Mode)> for Kickers {
    fn from((hand, mode): (Hand, Mode)) -> Self {
        Self(<[Card; HAND_SIZE]>::from(hand).map(|card| card.strength(mode)))
    }
}

/// [u8; 5] projection
impl From<Kickers> for [u8; HAND_SIZE] {
    fn from(k: Kickers) -> Self {
        k.0
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for strength in self.0 {
            write!(f, "{:>2} ", strength)?;
        }
        Ok(())
    }
}
