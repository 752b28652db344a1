use crate::MAX_ENVIDO;
use crate::SON_BUENAS;
use crate::UNKNOWN_ENVIDO;
use crate::envido::Constraint;

/// What a seat said when envido was declared.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Declaration {
    #[default]
    Undeclared,
    /// showed this score
    Score(u8),
    /// conceded to the best score so far, which was this
    SonBuenas(u8),
}

impl Declaration {
    /// 0..=7 and 20..=33, the scores a hand can make
    pub fn is_valid(score: u8) -> bool {
        score <= 7 || (20..=MAX_ENVIDO).contains(&score)
    }
    pub fn is_declared(&self) -> bool {
        !matches!(self, Self::Undeclared)
    }
    pub fn score(&self) -> Option<u8> {
        match self {
            Self::Score(n) => Some(*n),
            _ => None,
        }
    }
}

/// u8 isomorphism
/// 255 undeclared, 100 + n son buenas over n, n a shown score
impl TryFrom<u8> for Declaration {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            UNKNOWN_ENVIDO => Ok(Self::Undeclared),
            n if n >= SON_BUENAS && Self::is_valid(n - SON_BUENAS) => {
                Ok(Self::SonBuenas(n - SON_BUENAS))
            }
            n if Self::is_valid(n) => Ok(Self::Score(n)),
            n => Err(anyhow::anyhow!("invalid envido declaration: {}", n)),
        }
    }
}
impl From<Declaration> for u8 {
    fn from(d: Declaration) -> u8 {
        match d {
            Declaration::Undeclared => UNKNOWN_ENVIDO,
            Declaration::Score(n) => n,
            Declaration::SonBuenas(n) => n + SON_BUENAS,
        }
    }
}

/// what a declaration reveals about the hand behind it
impl From<Declaration> for Constraint {
    fn from(d: Declaration) -> Self {
        Constraint::from(u8::from(d))
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Undeclared => write!(f, "-"),
            Self::Score(n) => write!(f, "{}", n),
            Self::SonBuenas(n) => write!(f, "son buenas ({})", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in (0..=7u8).chain(20..=33).chain(100..=107).chain(120..=133).chain([255]) {
            assert_eq!(n, u8::from(Declaration::try_from(n).unwrap()));
        }
    }

    #[test]
    fn rejects_impossible_scores() {
        assert!(Declaration::try_from(13u8).is_err());
        assert!(Declaration::try_from(70u8).is_err());
        assert!(Declaration::try_from(140u8).is_err());
    }

    #[test]
    fn son_buenas_bounds_the_hand() {
        assert!(Constraint::from(Declaration::SonBuenas(27)) == Constraint::AtMost(27));
        assert!(Constraint::from(Declaration::Score(27)) == Constraint::Exactly(27));
        assert!(Constraint::from(Declaration::Undeclared) == Constraint::Unknown);
    }
}
