use crate::cards::Card;
use crate::cards::Hand;

/// Envido points a same-suit pair adds on top of its card values.
pub const PAIR_BONUS: u8 = 20;

impl Hand {
    /// Envido score, 0..=33.
    ///
    /// Best same-suit pair counts its two values plus 20. Without a pair it
    /// is the single highest value. Three cards of one suit (flor) score as
    /// their best pair.
    pub fn envido(&self) -> u8 {
        let [a, b, c] = self.envido_sorted().cards();
        let same = |x: &Card, y: &Card| x.suit() == y.suit();
        [(a, b), (a, c), (b, c)]
            .iter()
            .find(|(x, y)| same(x, y))
            .map(|(x, y)| x.envido() + y.envido() + PAIR_BONUS)
            .unwrap_or(a.envido())
    }

    /// Three cards of one suit.
    pub fn is_flor(&self) -> bool {
        let [a, b, c] = self.cards();
        a.suit() == b.suit() && b.suit() == c.suit()
    }
}

#[cfg(test)]
mod tests {
    use crate::Arbitrary;
    use crate::cards::Hand;

    fn envido(s: &str) -> u8 {
        Hand::try_from(s).unwrap().envido()
    }

    #[test]
    fn pairs() {
        assert_eq!(envido("6e 7e 1b"), 33);
        assert_eq!(envido("10o 12o 3c"), 20);
        assert_eq!(envido("1c 11c 7e"), 21);
        assert_eq!(envido("2b 4o 5b"), 27);
    }

    #[test]
    fn singles() {
        assert_eq!(envido("6e 7b 1o"), 7);
        assert_eq!(envido("10e 11b 12o"), 0);
        assert_eq!(envido("4e 10b 3c"), 4);
    }

    #[test]
    fn flor_is_best_pair() {
        let hand = Hand::try_from("1e 4e 7e").unwrap();
        assert!(hand.is_flor());
        assert_eq!(hand.envido(), 31);
    }

    #[test]
    fn distinct_suits_score_best_single() {
        for _ in 0..1000 {
            let hand = Hand::random();
            let [a, b, c] = hand.cards();
            if a.suit() != b.suit() && a.suit() != c.suit() && b.suit() != c.suit() {
                let best = hand.iter().map(|c| c.envido()).max().unwrap();
                assert_eq!(hand.envido(), best);
            }
        }
    }

    #[test]
    fn one_pair_scores_pair() {
        for _ in 0..1000 {
            let hand = Hand::random();
            let [a, b, c] = hand.cards();
            let pair = match (a.suit() == b.suit(), a.suit() == c.suit(), b.suit() == c.suit()) {
                (true, false, false) => Some((a, b)),
                (false, true, false) => Some((a, c)),
                (false, false, true) => Some((b, c)),
                _ => None,
            };
            if let Some((x, y)) = pair {
                assert_eq!(hand.envido(), x.envido() + y.envido() + 20);
            }
        }
    }
}
