use super::card::Card;
use super::category::Category;
use super::hand::Hand;
use super::mode::Mode;

/// A lazy evaluator for a hand's best achievable category.
///
/// Under [`Mode::Wildcard`] every joker is replaced by one of the other
/// cards already in the hand, and the replacement yielding the highest
/// category wins. Matching a card already present always dominates
/// introducing a fresh one, so candidates outside the hand are skipped.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_category(&self, mode: Mode) -> Category {
        Category::from(self.find_substitution(mode))
    }
    /// the hand after jokers take on their best value.
    /// only useful for display; ties always break on the original hand.
    pub fn find_substitution(&self, mode: Mode) -> Hand {
        match mode {
            Mode::Standard => self.0,
            Mode::Wildcard => self.find_best_replacement(),
        }
    }

    fn find_best_replacement(&self) -> Hand {
        if !self.0.contains(Card::WILD) {
            return self.0;
        }
        self.0
            .distinct()
            .into_iter()
            .filter(|card| !Mode::Wildcard.is_wild(*card))
            .map(|card| self.0.replace(Card::WILD, card))
            .max_by_key(|hand| Category::from(*hand))
            .unwrap_or(self.0) // all jokers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn wild(s: &str) -> Category {
        Evaluator::from(Hand::try_from(s).unwrap()).find_category(Mode::Wildcard)
    }

    #[test]
    fn all_jokers() {
        assert_eq!(wild("JJJJJ"), Category::FiveOAK);
        assert_eq!(
            Evaluator::from(Hand::try_from("JJJJJ").unwrap()).find_substitution(Mode::Wildcard),
            Hand::try_from("JJJJJ").unwrap()
        );
    }

    #[test]
    fn jokers_upgrade() {
        assert_eq!(wild("32T3K"), Category::OnePair);
        assert_eq!(wild("T55J5"), Category::FourOAK);
        assert_eq!(wild("KK677"), Category::TwoPair);
        assert_eq!(wild("KTJJT"), Category::FourOAK);
        assert_eq!(wild("QQQJA"), Category::FourOAK);
        assert_eq!(wild("2345J"), Category::OnePair);
        assert_eq!(wild("2233J"), Category::FullHouse);
        assert_eq!(wild("JJJJ2"), Category::FiveOAK);
        assert_eq!(wild("J2J3J"), Category::FourOAK);
    }

    #[test]
    fn substitution_rewrites_only_jokers() {
        let hand = Hand::try_from("KTJJT").unwrap();
        let best = Evaluator::from(hand).find_substitution(Mode::Wildcard);
        assert_eq!(best, Hand::try_from("KTTTT").unwrap());
    }

    #[test]
    fn standard_mode_is_literal() {
        for _ in 0..256 {
            let hand = Hand::random();
            assert_eq!(
                Evaluator::from(hand).find_category(Mode::Standard),
                Category::from(hand)
            );
        }
    }

    #[test]
    fn wildcard_never_worse_than_literal() {
        for _ in 0..1024 {
            let hand = Hand::random();
            assert!(Evaluator::from(hand).find_category(Mode::Wildcard) >= Category::from(hand));
        }
    }

    #[test]
    fn present_cards_match_full_alphabet() {
        for _ in 0..1024 {
            let hand = Hand::random();
            let exhaustive = Card::all()
                .into_iter()
                .map(|card| Category::from(hand.replace(Card::WILD, card)))
                .max()
                .unwrap();
            assert_eq!(Evaluator::from(hand).find_category(Mode::Wildcard), exhaustive);
        }
    }
}
