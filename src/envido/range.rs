use super::constraint::Constraint;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::combinatorics::combinations;

/// Hands a player could be holding.
///
/// Draws from the deck minus `known` (cards seen elsewhere), keeps the
/// combinations containing every card in `mine`, and drops those whose
/// envido the constraint rules out.
pub fn range(constraint: Constraint, mine: &[Card], known: &[Card]) -> Vec<Hand> {
    combinations(&Deck::excluding(known).cards(), 3)
        .filter(|cards| mine.iter().all(|c| cards.contains(c)))
        .filter_map(|cards| Hand::try_from(cards.as_slice()).ok())
        .filter(|hand| constraint.admits(hand.envido()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| Card::try_from(c).unwrap())
            .collect()
    }

    #[test]
    fn thirty_three_with_six_of_espadas() {
        let hands = range(Constraint::from(33u8), &cards("6e"), &cards("1b"));
        assert_eq!(hands.len(), 40);
        assert!(hands.iter().all(|h| h.envido() == 33));
    }

    #[test]
    fn exact_excludes_other_scores() {
        let hands = range(Constraint::from(27u8), &cards("10e 4e"), &cards("10o 5e"));
        let wrong = Hand::try_from("10e 4e 7e").unwrap();
        assert!(!hands.iter().any(|h| h.cards().iter().all(|c| wrong.contains(c))));
        assert!(hands.iter().all(|h| h.envido() == 27));
    }

    #[test]
    fn at_most() {
        let hands = range(Constraint::from(127u8), &cards("10c 4e"), &cards("10o 5e"));
        assert!(!hands.is_empty());
        assert!(hands.iter().all(|h| h.envido() <= 27));
    }

    #[test]
    fn unknown_is_every_combination() {
        assert_eq!(range(Constraint::Unknown, &[], &[]).len(), 9880);
        assert_eq!(range(Constraint::Unknown, &cards("1e 2e 3e"), &[]).len(), 1);
    }
}
