use super::score::PAIR_BONUS;
use crate::MAX_ENVIDO;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Number;
use crate::cards::Suit;
use crate::combinatorics::combinations;

/// Cards that carry the given envido value: the twelve figures for 0,
/// the four suits of the number otherwise.
fn valued(value: u8) -> Vec<Card> {
    match value {
        0 => Deck::figures().cards(),
        n => match Number::try_from(n) {
            Ok(number) => Suit::all().map(|s| Card::new(number, s)).to_vec(),
            Err(_) => vec![],
        },
    }
}

/// Scoring sub-hands of an envido score.
///
/// Scores below 20 come from a single card, scores from 20 up from a
/// same-suit pair. `pairs(33)` is `6e 7e`, `6b 7b`, `6o 7o`, `6c 7c`.
/// Scores no hand can make return nothing.
pub fn pairs(score: u8) -> Vec<Vec<Card>> {
    match score {
        0..=7 => valued(score).into_iter().map(|c| vec![c]).collect(),
        PAIR_BONUS => combinations(&Deck::figures().cards(), 2)
            .filter(|p| p[0].suit() == p[1].suit())
            .collect(),
        s if s > PAIR_BONUS && s <= MAX_ENVIDO => {
            let total = s - PAIR_BONUS;
            (0..=7u8)
                .filter_map(|a| total.checked_sub(a).map(|b| (a, b)))
                .filter(|&(a, b)| a < b && b <= 7)
                .flat_map(|(a, b)| {
                    let cards = [valued(a), valued(b)].concat();
                    combinations(&cards, 2)
                        .filter(|p| p[0].suit() == p[1].suit())
                        .filter(|p| !(p[0].is_figure() && p[1].is_figure()))
                        .collect::<Vec<_>>()
                })
                .collect()
        }
        _ => vec![],
    }
}

/// Every concrete 3-card hand scoring exactly `score`.
///
/// A pair is completed by any card of another suit. A single card needs two
/// companions of two further suits, none worth more envido than it.
pub fn hands(score: u8) -> Vec<Hand> {
    pairs(score)
        .into_iter()
        .flat_map(|scoring| match scoring.as_slice() {
            &[x, y] => Deck::full()
                .filter(|c| c.suit() != x.suit())
                .map(|c| Hand::from([x, y, c]))
                .collect::<Vec<_>>(),
            &[x] => {
                let candidates = Deck::full()
                    .filter(|c| c.suit() != x.suit())
                    .filter(|c| c.envido() <= x.envido())
                    .collect::<Vec<_>>();
                combinations(&candidates, 2)
                    .filter(|p| p[0].suit() != p[1].suit())
                    .map(|p| Hand::from([x, p[0], p[1]]))
                    .collect::<Vec<_>>()
            }
            _ => vec![],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_of_33() {
        let pairs = pairs(33);
        assert_eq!(pairs.len(), 4);
        assert!(pairs.iter().all(|p| p[0].envido() + p[1].envido() == 13));
    }

    #[test]
    fn pairs_with_figures() {
        // f1 across four suits
        assert_eq!(pairs(21).len(), 12);
        // f7, 16, 25, 34
        assert_eq!(pairs(27).len(), 12 + 4 + 4 + 4);
        assert_eq!(pairs(20).len(), 12);
        assert_eq!(pairs(0).len(), 12);
        assert_eq!(pairs(5).len(), 4);
    }

    #[test]
    fn impossible_scores() {
        assert!(pairs(8).is_empty());
        assert!(pairs(19).is_empty());
        assert!(pairs(34).is_empty());
        assert!(hands(15).is_empty());
    }

    #[test]
    fn hands_of_33() {
        let hands = hands(33);
        assert_eq!(hands.len(), 120);
        assert!(hands.iter().all(|h| h.envido() == 33));
    }

    #[test]
    fn hands_of_7() {
        let hands = hands(7);
        assert_eq!(hands.len(), 1200);
        assert!(hands.iter().all(|h| h.envido() == 7));
    }

    #[test]
    fn hands_of_20() {
        let hands = hands(20);
        assert_eq!(hands.len(), 360);
        assert!(hands.iter().all(|h| h.envido() == 20));
    }

    #[test]
    fn every_hand_scores_its_target() {
        for score in (0..=7).chain(20..=33) {
            assert!(hands(score).iter().all(|h| h.envido() == score));
        }
    }
}
