use crate::cards::Card;
use crate::cards::Hand;
use crate::envido::Constraint;

/// What an observer knows about one seat's hand, for looking up
/// precomputed rows of the hand table.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Filter {
    /// cards on the table that this hand cannot hold
    pub known: Vec<Card>,
    /// cards this hand has shown
    pub mine: Vec<Card>,
    pub envido: Constraint,
}

impl Filter {
    pub fn admits(&self, hand: &Hand, envido: u8) -> bool {
        self.known.iter().all(|c| !hand.contains(c))
            && self.mine.iter().all(|c| hand.contains(c))
            && self.envido.admits(envido)
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let join = |cards: &[Card]| {
            cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(
            f,
            "mine [{}] known [{}] envido {}",
            join(&self.mine),
            join(&self.known),
            self.envido
        )
    }
}
