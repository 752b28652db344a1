use super::number::Number;
use super::suit::Suit;
use crate::Arbitrary;
use std::cmp::Ordering;

/// A single card of the Spanish deck.
///
/// Identity is the (number, suit) pair. Two independent scalar rankings hang
/// off a card: the truco rank (who wins a round) and the envido value (how
/// much it adds to a same-suit pair).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    number: Number,
    suit: Suit,
}

impl Card {
    pub const fn new(number: Number, suit: Suit) -> Self {
        Self { number, suit }
    }
    pub fn number(&self) -> Number {
        self.number
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn is_figure(&self) -> bool {
        self.number.is_figure()
    }
    pub fn is_pieza(&self) -> bool {
        self.suit.is_pieza()
    }

    /// Envido value: the face number for 1..7, zero for figures.
    pub fn envido(&self) -> u8 {
        self.number.envido()
    }

    /// Truco rank, higher beats lower, equal ties.
    ///
    /// 1e 14, 1b 13, 7e 12, 7o 11, 3 10, 2 9, 1o/1c 8, 12 7, 11 6, 10 5,
    /// 7b/7c 4, 6 3, 5 2, 4 1. Piezas sit above everything: 2p 19, 4p 18,
    /// 5p 17, 11p 16, 10p 15.
    pub fn truco(&self) -> u8 {
        match (self.number, self.suit) {
            (Number::Two, Suit::Pieza) => 19,
            (Number::Four, Suit::Pieza) => 18,
            (Number::Five, Suit::Pieza) => 17,
            (Number::Caballo, Suit::Pieza) => 16,
            (Number::Sota, Suit::Pieza) => 15,
            (Number::One, Suit::Espada) => 14,
            (Number::One, Suit::Basto) => 13,
            (Number::Seven, Suit::Espada) => 12,
            (Number::Seven, Suit::Oro) => 11,
            (Number::Three, _) => 10,
            (Number::Two, _) => 9,
            (Number::One, _) => 8,
            (Number::Rey, _) => 7,
            (Number::Caballo, _) => 6,
            (Number::Sota, _) => 5,
            (Number::Seven, _) => 4,
            (Number::Six, _) => 3,
            (Number::Five, _) => 2,
            (Number::Four, _) => 1,
        }
    }

    /// Highest envido value first, figures last.
    pub fn envido_order(a: &Card, b: &Card) -> Ordering {
        b.envido().cmp(&a.envido())
    }
    /// Highest truco rank first.
    pub fn truco_order(a: &Card, b: &Card) -> Ordering {
        b.truco().cmp(&a.truco())
    }

    /// The numbers a pieza can carry, strongest first.
    pub const PIEZAS: [Number; 5] = [
        Number::Two,
        Number::Four,
        Number::Five,
        Number::Caballo,
        Number::Sota,
    ];

    fn is_valid(number: Number, suit: Suit) -> bool {
        !suit.is_pieza() || Self::PIEZAS.contains(&number)
    }
}

/// u8 isomorphism
/// flat cards map to their position in the canonical deck 0..40,
/// number-major so that 1e 1b 1o 1c 2e .. 12c.
/// piezas map past the deck to 40..45, strongest first.
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        match c.suit {
            Suit::Pieza => {
                let i = Card::PIEZAS.iter().position(|n| *n == c.number);
                crate::N_CARDS as u8 + i.unwrap_or_default() as u8
            }
            suit => c.number.index() * 4 + u8::from(suit),
        }
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        match n {
            0..40 => Self {
                number: Number::from_index(n / 4),
                suit: Suit::from(n % 4),
            },
            40..45 => Self {
                number: Self::PIEZAS[n as usize - 40],
                suit: Suit::Pieza,
            },
            _ => unreachable!("invalid card index"),
        }
    }
}

/// u64 isomorphism
/// each card is one bit of the deck bitset
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
/// "1e", "10c", "2p"
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let suit = s
            .chars()
            .last()
            .ok_or_else(|| anyhow::anyhow!("empty card str"))?;
        let number = Number::try_from(&s[..s.len() - suit.len_utf8()])?;
        let suit = Suit::try_from(suit)?;
        if Self::is_valid(number, suit) {
            Ok(Self::new(number, suit))
        } else {
            Err(anyhow::anyhow!("{}{} is not a pieza", number, suit))
        }
    }
}
impl TryFrom<String> for Card {
    type Error = anyhow::Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Card> for String {
    fn from(c: Card) -> String {
        c.to_string()
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..crate::N_CARDS as u8))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.number, self.suit)
    }
}
