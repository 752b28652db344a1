use super::compare::compare;
use super::compare::compare_uy;
use super::reasonable::is_reasonably_played;
use super::stats::TrucoStats;
use crate::Probability;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Muestra;
use crate::combinatorics::permutations;
use crate::combinatorics::pick;
use crate::envido::Constraint;

/// Every play order of 3 distinct cards.
fn orders(cards: &[Card]) -> Vec<Hand> {
    permutations(cards, 3)
        .filter_map(|p| Hand::try_from(p.as_slice()).ok())
        .collect()
}

impl Hand {
    /// Brute-force win probability against one opponent, given what is known.
    ///
    /// - `known`: cards the opponent already played, in play order.
    /// - `excluded`: cards the opponent cannot hold (played by other seats).
    /// - `envido`: what the opponent's envido declaration reveals.
    /// - `first`: whether this hand leads round 0.
    /// - `strategy`: drop opponent orders that fail the reasonable-play filter.
    ///
    /// Every order of this hand meets every opponent order compatible with
    /// the above, and each pair counts +1/0/-1.
    pub fn truco_stats(
        &self,
        known: &[Card],
        excluded: &[Card],
        envido: Constraint,
        first: bool,
        strategy: bool,
    ) -> TrucoStats {
        let gone = [self.cards().as_slice(), excluded].concat();
        let theirs = orders(&Deck::excluding(&gone).cards())
            .into_iter()
            .filter(|h| h.starts_with(known))
            .filter(|h| envido.admits(h.envido()))
            .collect::<Vec<Hand>>();
        let raw = orders(&self.cards())
            .into_iter()
            .map(|mine| {
                let (score, count) = theirs
                    .iter()
                    .filter(|other| match (strategy, first) {
                        (false, _) => true,
                        (true, true) => is_reasonably_played(&mine, other),
                        (true, false) => is_reasonably_played(other, &mine),
                    })
                    .fold((0i64, 0usize), |(s, c), other| {
                        (s + compare(&mine, other) as i64, c + 1)
                    });
                (mine, score, count)
            })
            .collect::<Vec<_>>();
        let stats = TrucoStats::from_raw(raw);
        log::debug!(
            "{} strength {:.3} over {} samples",
            self,
            stats.strength(),
            stats.count()
        );
        stats
    }

    /// Unconstrained strength in [0, 1].
    ///
    /// Every order of this hand against every order of every hand drawn
    /// from the other 37 cards, 6 x 6 = 36 orderings per combination.
    pub fn strength(&self) -> Probability {
        let mine = orders(&self.cards());
        let theirs = orders(&Deck::excluding(&self.cards()).cards());
        let raw = mine
            .iter()
            .flat_map(|m| theirs.iter().map(move |o| compare(m, o) as i64))
            .sum::<i64>();
        (raw as Probability / pick(37, 3) + 36.) / 72.
    }

    /// Strength under the Uruguayan rules, averaged over every muestra
    /// the opponent is not holding.
    pub fn strength_uy(&self) -> Probability {
        let mine = orders(&self.cards());
        let deck = Deck::excluding(&self.cards()).cards();
        let theirs = orders(&deck);
        let mut score = 0i64;
        let mut count = 0usize;
        for muestra in deck.iter().map(|&c| Muestra::from(c)) {
            for other in theirs.iter().filter(|o| !o.contains(&muestra.card())) {
                for m in mine.iter() {
                    score += compare_uy(m, other, &muestra) as i64;
                    count += 1;
                }
            }
        }
        match count {
            0 => 0.,
            n => (score as Probability / n as Probability + 1.) / 2.,
        }
    }
}
