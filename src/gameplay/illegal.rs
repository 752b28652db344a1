use crate::cards::Card;

/// Why a match refused an action. The match is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Illegal {
    /// the match is over
    Finished,
    /// a raise is pending an answer
    MustRespond,
    /// envido was accepted and scores are being declared
    MustAnnounce,
    /// nothing is pending to accept or declare
    MustPlayOrRaise,
    /// truco is already at vale cuatro
    TrucoCeiling,
    /// the asking team raised last
    TrucoTurn,
    /// envido is only open in the first round, once
    EnvidoClosed,
    /// only the pie of the table opens envido
    EnvidoTurn,
    /// that raise does not go on top of the current envido bet
    EnvidoCeiling,
    /// the current player has played all cards
    SlotsFull,
    /// not a score any hand can make
    InvalidScore(u8),
    /// the card is already on the table, or not part of the deck
    Unknown(Card),
}

impl std::fmt::Display for Illegal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finished => write!(f, "can't play a finished match"),
            Self::MustRespond => write!(f, "you must respond"),
            Self::MustAnnounce => write!(f, "you must announce your envido"),
            Self::MustPlayOrRaise => write!(f, "you must play a card or raise"),
            Self::TrucoCeiling => write!(f, "truco is at its highest"),
            Self::TrucoTurn => write!(f, "your team raised truco last"),
            Self::EnvidoClosed => write!(f, "envido is closed"),
            Self::EnvidoTurn => write!(f, "you can't open envido"),
            Self::EnvidoCeiling => write!(f, "you can't raise envido that way"),
            Self::SlotsFull => write!(f, "you have no cards left"),
            Self::InvalidScore(n) => write!(f, "{} is not a valid envido", n),
            Self::Unknown(card) => write!(f, "{} can't be played", card),
        }
    }
}

impl std::error::Error for Illegal {}
