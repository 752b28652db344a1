/// A legal move as offered to a player, labeled the way the table talks.
///
/// Several choices map to the same [`Action`](super::Action): the three
/// truco asks are all `Ask(Truco)` at different levels, and the folds are
/// all `Fold` with different meanings per state.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Choice {
    Play,
    AskTruco,
    AskRetruco,
    AskValeCuatro,
    AskEnvido,
    AskRealEnvido,
    AskFaltaEnvido,
    Accept,
    /// give up the hand
    Fold,
    /// decline a raise
    FoldNoQuiero,
    /// concede the envido without showing it
    FoldSonBuenas,
    Announce,
}

impl Choice {
    pub const fn all() -> [Choice; 12] {
        [
            Choice::Play,
            Choice::AskTruco,
            Choice::AskRetruco,
            Choice::AskValeCuatro,
            Choice::AskEnvido,
            Choice::AskRealEnvido,
            Choice::AskFaltaEnvido,
            Choice::Accept,
            Choice::Fold,
            Choice::FoldNoQuiero,
            Choice::FoldSonBuenas,
            Choice::Announce,
        ]
    }
    pub fn label(&self) -> &'static str {
        match self {
            Choice::Play => "play",
            Choice::AskTruco => "ask_t",
            Choice::AskRetruco => "ask_rt",
            Choice::AskValeCuatro => "ask_v4",
            Choice::AskEnvido => "ask_e",
            Choice::AskRealEnvido => "ask_re",
            Choice::AskFaltaEnvido => "ask_fe",
            Choice::Accept => "accept",
            Choice::Fold => "fold",
            Choice::FoldNoQuiero => "fold_nq",
            Choice::FoldSonBuenas => "fold_sb",
            Choice::Announce => "announce",
        }
    }
}

impl From<Choice> for String {
    fn from(c: Choice) -> String {
        c.label().to_string()
    }
}
impl TryFrom<String> for Choice {
    type Error = anyhow::Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl TryFrom<&str> for Choice {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|c| c.label() == s.trim())
            .ok_or_else(|| anyhow::anyhow!("invalid choice: {}", s))
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
