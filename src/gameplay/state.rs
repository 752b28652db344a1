/// Which of the four protocol phases a match is in.
///
/// Pure tag. The behavior lives in [`Match`](super::Match), which dispatches
/// on it, and the tag is what a token carries to restore the phase.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum State {
    /// terminal, every action fails
    End = 0,
    /// cards are played and bets opened
    #[default]
    Playing = 1,
    /// envido accepted, players declare their score in seat order
    Announcing = 2,
    /// a raise is pending, truco or envido by `is_envido`
    Responding = 3,
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::End)
    }
}

/// u8 isomorphism
/// unknown tags resume play rather than fail
impl From<u8> for State {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::End,
            2 => Self::Announcing,
            3 => Self::Responding,
            _ => Self::Playing,
        }
    }
}
impl From<State> for u8 {
    fn from(s: State) -> u8 {
        s as u8
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::End => write!(f, "end"),
            Self::Playing => write!(f, "playing"),
            Self::Announcing => write!(f, "announcing"),
            Self::Responding => write!(f, "responding"),
        }
    }
}
