use super::hand::Hand;

/// A hand's category, derived purely from how many times each card repeats.
///
/// Kicker cards are not part of the category; see [`super::Kickers`].
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Category {
    HighCard = 1,  // 1 1 1 1 1
    OnePair = 2,   // 2 1 1 1
    TwoPair = 3,   // 2 2 1
    ThreeOAK = 4,  // 3 1 1
    FullHouse = 5, // 3 2
    FourOAK = 6,   // 4 1
    FiveOAK = 7,   // 5
}

impl Category {
    pub const fn all() -> [Self; 7] {
        [
            Self::HighCard,
            Self::OnePair,
            Self::TwoPair,
            Self::ThreeOAK,
            Self::FullHouse,
            Self::FourOAK,
            Self::FiveOAK,
        ]
    }
}

/// the literal category, with no wildcard substitution
impl From<Hand> for Category {
    fn from(hand: Hand) -> Self {
        let mut shape = hand
            .counts()
            .into_iter()
            .filter(|n| *n > 0)
            .collect::<Vec<u8>>();
        shape.sort_unstable_by(|a, b| b.cmp(a));
        match shape.as_slice() {
            [5] => Self::FiveOAK,
            [4, 1] => Self::FourOAK,
            [3, 2] => Self::FullHouse,
            [3, 1, 1] => Self::ThreeOAK,
            [2, 2, 1] => Self::TwoPair,
            [2, 1, 1, 1] => Self::OnePair,
            [1, 1, 1, 1, 1] => Self::HighCard,
            _ => unreachable!("five cards partition into seven shapes"),
        }
    }
}

impl From<Category> for u8 {
    fn from(c: Category) -> u8 {
        c as u8
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::HighCard => write!(f, "HighCard     "),
            Category::OnePair => write!(f, "OnePair      "),
            Category::TwoPair => write!(f, "TwoPair      "),
            Category::ThreeOAK => write!(f, "ThreeOfAKind "),
            Category::FullHouse => write!(f, "FullHouse    "),
            Category::FourOAK => write!(f, "FourOfAKind  "),
            Category::FiveOAK => write!(f, "FiveOfAKind  "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;

    fn category(s: &str) -> Category {
        Category::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn ordinals() {
        assert_eq!(Category::all().map(u8::from), [1, 2, 3, 4, 5, 6, 7]);
        assert!(Category::all().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn five_identical_cards() {
        for card in Card::all() {
            let hand = Hand::from([card; 5]);
            assert_eq!(Category::from(hand), Category::FiveOAK);
        }
    }

    #[test]
    fn full_house_either_order() {
        assert_eq!(category("33322"), Category::FullHouse);
        assert_eq!(category("22333"), Category::FullHouse);
        assert_eq!(category("32323"), Category::FullHouse);
        assert_ne!(category("23332"), Category::ThreeOAK);
    }

    #[test]
    fn every_shape() {
        assert_eq!(category("AAAAA"), Category::FiveOAK);
        assert_eq!(category("AA8AA"), Category::FourOAK);
        assert_eq!(category("23332"), Category::FullHouse);
        assert_eq!(category("TTT98"), Category::ThreeOAK);
        assert_eq!(category("23432"), Category::TwoPair);
        assert_eq!(category("A23A4"), Category::OnePair);
        assert_eq!(category("23456"), Category::HighCard);
    }

    #[test]
    fn jack_is_literal() {
        assert_eq!(category("JJJJJ"), Category::FiveOAK);
        assert_eq!(category("KTJJT"), Category::TwoPair);
        assert_eq!(category("QQQJA"), Category::ThreeOAK);
    }
}
