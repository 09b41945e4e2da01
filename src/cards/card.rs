use super::mode::Mode;
use crate::Arbitrary;

/// A single card symbol. Camel Cards has no suits.
///
/// Variant order is the conventional poker order, so the derived `Ord`
/// matches [`Card::strength`] under [`Mode::Standard`]. Under
/// [`Mode::Wildcard`] use `strength` instead, since the joker drops
/// below `Two`.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Card {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Card {
    /// The joker under [`Mode::Wildcard`].
    pub const WILD: Self = Self::Jack;

    pub const fn all() -> [Self; 13] {
        [
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
            Self::Ten,
            Self::Jack,
            Self::Queen,
            Self::King,
            Self::Ace,
        ]
    }

    /// Tie-break value. 2..=14 normally, with the joker at 1 when wild.
    pub fn strength(&self, mode: Mode) -> u8 {
        if mode.is_wild(*self) {
            1
        } else {
            u8::from(*self) + 2
        }
    }
}

/// u8 isomorphism
impl From<u8> for Card {
    fn from(n: u8) -> Card {
        match n {
            0 => Card::Two,
            1 => Card::Three,
            2 => Card::Four,
            3 => Card::Five,
            4 => Card::Six,
            5 => Card::Seven,
            6 => Card::Eight,
            7 => Card::Nine,
            8 => Card::Ten,
            9 => Card::Jack,
            10 => Card::Queen,
            11 => Card::King,
            12 => Card::Ace,
            _ => panic!("invalid card u8: {}", n),
        }
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c as u8
    }
}

/// char isomorphism
impl TryFrom<char> for Card {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Card::Two),
            '3' => Ok(Card::Three),
            '4' => Ok(Card::Four),
            '5' => Ok(Card::Five),
            '6' => Ok(Card::Six),
            '7' => Ok(Card::Seven),
            '8' => Ok(Card::Eight),
            '9' => Ok(Card::Nine),
            'T' => Ok(Card::Ten),
            'J' => Ok(Card::Jack),
            'Q' => Ok(Card::Queen),
            'K' => Ok(Card::King),
            'A' => Ok(Card::Ace),
            _ => Err(format!("invalid card symbol: {}", c)),
        }
    }
}
impl From<Card> for char {
    fn from(c: Card) -> char {
        match c {
            Card::Two => '2',
            Card::Three => '3',
            Card::Four => '4',
            Card::Five => '5',
            Card::Six => '6',
            Card::Seven => '7',
            Card::Eight => '8',
            Card::Nine => '9',
            Card::Ten => 'T',
            Card::Jack => 'J',
            Card::Queen => 'Q',
            Card::King => 'K',
            Card::Ace => 'A',
        }
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self::from(rand::random_range(0..13u8))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
