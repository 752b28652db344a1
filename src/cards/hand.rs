use super::card::Card;
use super::deck::Deck;
use crate::Arbitrary;

/// Three cards in play order.
///
/// Order matters when the hand is played round by round; envido and
/// aggregate strength treat it as a set. Unplayed slots of a partially
/// played hand are modeled as `Option<Card>` by the match, never here.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hand([Card; 3]);

impl Hand {
    pub fn cards(&self) -> [Card; 3] {
        self.0
    }
    pub fn card(&self, round: usize) -> Card {
        self.0[round]
    }
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// true if the hand starts with exactly these cards, in this order
    pub fn starts_with(&self, prefix: &[Card]) -> bool {
        self.0.starts_with(prefix)
    }
    pub fn is_distinct(&self) -> bool {
        self.0[0] != self.0[1] && self.0[0] != self.0[2] && self.0[1] != self.0[2]
    }
    /// same cards, strongest truco rank first
    pub fn truco_sorted(&self) -> Self {
        let mut cards = self.0;
        cards.sort_by(Card::truco_order);
        Self(cards)
    }
    /// same cards, highest envido value first
    pub fn envido_sorted(&self) -> Self {
        let mut cards = self.0;
        cards.sort_by(Card::envido_order);
        Self(cards)
    }
}

impl From<[Card; 3]> for Hand {
    fn from(cards: [Card; 3]) -> Self {
        Self(cards)
    }
}
impl From<Hand> for [Card; 3] {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}
impl TryFrom<&[Card]> for Hand {
    type Error = anyhow::Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        <[Card; 3]>::try_from(cards)
            .map(Self)
            .map_err(|_| anyhow::anyhow!("a hand has 3 cards, got {}", cards.len()))
    }
}

/// str isomorphism
/// "1e 7o 12c"
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?;
        let hand = Self::try_from(cards.as_slice())?;
        if hand.is_distinct() {
            Ok(hand)
        } else {
            Err(anyhow::anyhow!("repeated card in hand: {}", s))
        }
    }
}
impl TryFrom<String> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Hand> for String {
    fn from(h: Hand) -> String {
        h.to_string()
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        use rand::seq::SliceRandom;
        let ref mut rng = rand::rng();
        let mut cards = Deck::full().collect::<Vec<Card>>();
        cards.shuffle(rng);
        Self([cards[0], cards[1], cards[2]])
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}
