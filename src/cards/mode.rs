use super::card::Card;

/// Ruleset a hand is ranked under.
///
/// Under `Wildcard`, [`Card::WILD`] stands in for whichever card
/// makes the best category, but kicks as the weakest card.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Mode {
    #[default]
    Standard,
    Wildcard,
}

impl Mode {
    pub const fn all() -> [Self; 2] {
        [Self::Standard, Self::Wildcard]
    }
    pub fn is_wild(&self, card: Card) -> bool {
        matches!(self, Self::Wildcard) && card == Card::WILD
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Wildcard => write!(f, "wildcard"),
        }
    }
}
