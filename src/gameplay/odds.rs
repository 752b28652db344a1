use super::filter::Filter;
use super::matches::Match;
use crate::N_PLAYERS;
use crate::Position;
use crate::cards::Hand;
use crate::envido::Constraint;
use crate::truco::TrucoStats;

/// Bridges a live match to the evaluators.
impl Match {
    /// What the table reveals about this seat's hand.
    pub fn filter(&self, seat: Position) -> Filter {
        Filter {
            known: self.played_by_others(seat),
            mine: self.played(seat),
            envido: Constraint::from(self.envidos()[seat]),
        }
    }

    /// Strength of `hand` at `seat` against the next seat, given every
    /// card on the table and what that seat declared.
    pub fn odds(&self, seat: Position, hand: &Hand, strategy: bool) -> TrucoStats {
        let opponent = Self::next(seat);
        let known = self.played(opponent);
        let excluded = (0..N_PLAYERS)
            .filter(|&p| p != seat && p != opponent)
            .flat_map(|p| self.played(p))
            .collect::<Vec<_>>();
        let envido = Constraint::from(self.envidos()[opponent]);
        hand.truco_stats(&known, &excluded, envido, seat != N_PLAYERS - 1, strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::gameplay::Request;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn filter_from_table() {
        let mut m = Match::new();
        m.play(card("1e")).unwrap();
        m.play(card("7o")).unwrap();
        let filter = m.filter(0);
        assert!(filter.mine == vec![card("1e")]);
        assert!(filter.known == vec![card("7o")]);
        assert!(filter.envido == Constraint::Unknown);
    }

    #[test]
    fn filter_carries_declarations() {
        let mut m = Match::new();
        m.play(card("4e")).unwrap();
        m.play(card("4b")).unwrap();
        m.ask(Request::Envido).unwrap();
        m.accept().unwrap();
        m.announce(31).unwrap();
        m.announce(20).unwrap();
        assert!(m.filter(0).envido == Constraint::Exactly(31));
        assert!(m.filter(1).envido == Constraint::AtMost(31));
        assert!(m.filter(2).envido == Constraint::Unknown);
    }

    #[test]
    fn odds_see_the_opponent_card() {
        let mut m = Match::new();
        m.play(card("4e")).unwrap();
        m.play(card("1e")).unwrap();
        let hand = Hand::try_from("4e 5b 6o").unwrap();
        let stats = m.odds(0, &hand, false);
        // the opponent leads with the ace of swords in every sample
        assert!(stats.count() > 0);
        assert!(stats.strength() < 0.5);
        assert!(stats.strength() < hand.truco_stats(&[], &[], Constraint::Unknown, true, false).strength());
    }
}
