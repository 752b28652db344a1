use super::card::Card;
use super::number::Number;
use super::suit::Suit;

/// A set of flat cards, one bit per card of the 40-card deck.
///
/// Iteration drains the lowest bit first, which is the canonical deck order:
/// numbers ascending 1..7 then 10..12, suits e b o c inside each number.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Deck(u64);

impl Deck {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn full() -> Self {
        Self(Self::mask())
    }
    /// the twelve 10s, 11s and 12s
    pub fn figures() -> Self {
        [Number::Sota, Number::Caballo, Number::Rey]
            .into_iter()
            .flat_map(|n| Suit::all().map(|s| Card::new(n, s)))
            .collect()
    }
    /// full deck minus the given cards
    pub fn excluding(cards: &[Card]) -> Self {
        let mut deck = Self::full();
        cards.iter().for_each(|c| deck.remove(*c));
        deck
    }

    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        !card.is_pieza() && self.0 & u64::from(*card) != 0
    }
    /// piezas are never part of the deck and are ignored
    pub fn insert(&mut self, card: Card) {
        if !card.is_pieza() {
            self.0 |= u64::from(card);
        }
    }
    pub fn remove(&mut self, card: Card) {
        if !card.is_pieza() {
            self.0 &= !u64::from(card);
        }
    }
    pub fn cards(&self) -> Vec<Card> {
        (*self).collect()
    }

    const fn mask() -> u64 {
        (1 << crate::N_CARDS) - 1
    }
}

/// drain from lowest to highest index
impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut deck = Self::empty();
        iter.into_iter().for_each(|c| deck.insert(c));
        deck
    }
}

/// u64 isomorphism
impl From<u64> for Deck {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Deck> for u64 {
    fn from(d: Deck) -> Self {
        d.0
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.cards().iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
