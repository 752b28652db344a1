use super::card::Card;
use super::hand::Hand;
use super::number::Number;
use super::suit::Suit;

/// The card turned face up in the Uruguayan variant.
///
/// Cards of the muestra's suit numbered 2, 4, 5, 10 or 11 become piezas.
/// The 12 of that suit stands in for the muestra itself, taking its number,
/// when the muestra is one of those pieza numbers.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Muestra(Card);

impl Muestra {
    pub fn card(&self) -> Card {
        self.0
    }

    pub fn promote(&self, card: Card) -> Card {
        if card.suit() != self.0.suit() {
            card
        } else if Self::is_pieza(card.number()) {
            Card::new(card.number(), Suit::Pieza)
        } else if card.number() == Number::Rey && Self::is_pieza(self.0.number()) {
            Card::new(self.0.number(), Suit::Pieza)
        } else {
            card
        }
    }

    pub fn hand(&self, hand: &Hand) -> Hand {
        Hand::from(hand.cards().map(|c| self.promote(c)))
    }

    fn is_pieza(number: Number) -> bool {
        Card::PIEZAS.contains(&number)
    }
}

impl From<Card> for Muestra {
    fn from(card: Card) -> Self {
        Self(card)
    }
}

impl std::fmt::Display for Muestra {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "muestra {}", self.0)
    }
}

impl Card {
    /// Truco rank after promotion by the muestra.
    pub fn truco_uy(&self, muestra: &Muestra) -> u8 {
        muestra.promote(*self).truco()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn promotes_muestra_suit() {
        let muestra = Muestra::from(card("3o"));
        assert!(muestra.promote(card("2o")) == card("2p"));
        assert!(muestra.promote(card("11o")) == card("11p"));
        assert!(muestra.promote(card("2e")) == card("2e"));
        assert!(muestra.promote(card("1o")) == card("1o"));
        assert!(muestra.promote(card("12o")) == card("12o"));
    }

    #[test]
    fn rey_replaces_pieza_muestra() {
        let muestra = Muestra::from(card("4c"));
        assert!(muestra.promote(card("12c")) == card("4p"));
        assert_eq!(card("12c").truco_uy(&muestra), 18);
        assert_eq!(card("12b").truco_uy(&muestra), 7);
    }
}
