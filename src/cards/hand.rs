use super::card::Card;
use crate::Arbitrary;
use crate::HAND_SIZE;

/// Hand is an ordered sequence of exactly five Cards.
///
/// Order matters: it is the tie-break order between hands of equal
/// category. Hands are never mutated; substitution yields a new Hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }
    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }
    /// occurrences of each card, indexed by u8::from(Card)
    pub fn counts(&self) -> [u8; 13] {
        self.0.iter().fold([0u8; 13], |mut counts, card| {
            counts[u8::from(*card) as usize] += 1;
            counts
        })
    }
    /// distinct cards in order of first appearance
    pub fn distinct(&self) -> Vec<Card> {
        self.0.iter().fold(Vec::with_capacity(HAND_SIZE), |mut seen, card| {
            if !seen.contains(card) {
                seen.push(*card);
            }
            seen
        })
    }
    /// every occurrence of `from` becomes `into`
    pub fn replace(&self, from: Card, into: Card) -> Self {
        Self(self.0.map(|c| if c == from { into } else { c }))
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = std::array::IntoIter<Card, HAND_SIZE>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// [Card; 5] isomorphism
impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }
}
impl From<Hand> for [Card; HAND_SIZE] {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// str isomorphism
/// "32T3K" -> [Three, Two, Ten, Three, King]
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .chars()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?
            .try_into()
            .map(Self)
            .map_err(|cards: Vec<Card>| {
                format!("hand must have {} cards, found {}", HAND_SIZE, cards.len())
            })
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        Self(std::array::from_fn(|_| Card::random()))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0 {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
