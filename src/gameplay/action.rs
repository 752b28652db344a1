use super::request::Request;
use crate::cards::Card;

/// A single protocol event submitted to a match.
///
/// Who acts is implied by the match: the current player for play, raises
/// and truco responses, the next undeclared seat while announcing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Action {
    Play(Card),
    Ask(Request),
    /// quiero
    Accept,
    /// no quiero, son buenas, or giving up the hand, depending on state
    Fold,
    Announce(u8),
}

/// str isomorphism
/// "play 1e", "ask truco", "accept", "fold", "announce 30"
impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut words = s.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            return Err(anyhow::anyhow!("trailing input in action: {}", s));
        }
        let arg = || arg.ok_or_else(|| anyhow::anyhow!("missing argument: {}", s));
        match verb.as_str() {
            "play" => Ok(Self::Play(Card::try_from(arg()?)?)),
            "ask" => Ok(Self::Ask(Request::try_from(arg()?)?)),
            "announce" => Ok(Self::Announce(arg()?.parse::<u8>()?)),
            "accept" => Ok(Self::Accept),
            "fold" => Ok(Self::Fold),
            _ => Err(anyhow::anyhow!("invalid action: {}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Play(card) => write!(f, "play {}", card),
            Self::Ask(request) => write!(f, "ask {}", request),
            Self::Accept => write!(f, "accept"),
            Self::Fold => write!(f, "fold"),
            Self::Announce(score) => write!(f, "announce {}", score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        let actions = [
            Action::Play(Card::try_from("10c").unwrap()),
            Action::Ask(Request::Truco),
            Action::Ask(Request::FaltaEnvido),
            Action::Accept,
            Action::Fold,
            Action::Announce(27),
        ];
        for action in actions {
            assert!(action == Action::try_from(action.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(Action::try_from("").is_err());
        assert!(Action::try_from("play").is_err());
        assert!(Action::try_from("play 9e").is_err());
        assert!(Action::try_from("announce lots").is_err());
        assert!(Action::try_from("fold now please").is_err());
    }
}
