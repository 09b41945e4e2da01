use super::category::Category;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::mode::Mode;

/// A hand's strength.
///
/// Always constructed from a Hand under some Mode. Ordered by the best
/// achievable Category first, then by the original cards as Kickers.
/// Field order is load-bearing for the derived Ord.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Category,
    kicks: Kickers,
}

impl Strength {
    pub fn category(&self) -> Category {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<(Hand, Mode)> for Strength {
    fn from((hand, mode): (Hand, Mode)) -> Self {
        Self {
            value: Evaluator::from(hand).find_category(mode),
            kicks: Kickers::from((hand, mode)),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use std::cmp::Ordering;

    fn strength(s: &str, mode: Mode) -> Strength {
        Strength::from((Hand::try_from(s).unwrap(), mode))
    }

    #[test]
    fn category_dominates_kickers() {
        assert!(strength("22223", Mode::Standard) > strength("AAAKK", Mode::Standard));
        assert!(strength("23456", Mode::Standard) < strength("22345", Mode::Standard));
    }

    #[test]
    fn kickers_break_ties() {
        assert!(strength("KK677", Mode::Standard) > strength("KTJJT", Mode::Standard));
        assert!(strength("QQQJA", Mode::Standard) > strength("T55J5", Mode::Standard));
    }

    #[test]
    fn wildcard_reorders_fixture() {
        // T55J5, KTJJT, QQQJA are all four of a kind with jokers
        let t = strength("T55J5", Mode::Wildcard);
        let k = strength("KTJJT", Mode::Wildcard);
        let q = strength("QQQJA", Mode::Wildcard);
        assert_eq!(t.category(), Category::FourOAK);
        assert!(t < q && q < k);
    }

    #[test]
    fn ties_break_on_original_cards() {
        // JKKK2 is four of a kind but its joker kicks below QQQQ2's queen
        assert!(strength("JKKK2", Mode::Wildcard) < strength("QQQQ2", Mode::Wildcard));
    }

    #[test]
    fn identical_hands_are_equal() {
        let a = strength("T55J5", Mode::Wildcard);
        let b = strength("T55J5", Mode::Wildcard);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn deterministic() {
        for mode in Mode::all() {
            let hand = Hand::random();
            assert_eq!(Strength::from((hand, mode)), Strength::from((hand, mode)));
        }
    }

    #[test]
    fn strict_weak_order() {
        for mode in Mode::all() {
            for _ in 0..1024 {
                let a = Strength::from((Hand::random(), mode));
                let b = Strength::from((Hand::random(), mode));
                let c = Strength::from((Hand::random(), mode));
                let trichotomy = [a < b, a == b, b < a];
                assert_eq!(trichotomy.iter().filter(|x| **x).count(), 1);
                if a < b && b < c {
                    assert!(a < c);
                }
                if a <= b && b <= c {
                    assert!(a <= c);
                }
            }
        }
    }
}
