use crate::SON_BUENAS;
use crate::UNKNOWN_ENVIDO;

/// What an observer knows about somebody's envido.
///
/// Travels as the same u8 the match stores for declarations:
/// 255 nothing known, 100..=254 "son buenas" over `n - 100` (so at most
/// that), anything else an exact score. 99 carries no information either,
/// since it is never a declarable score.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Constraint {
    #[default]
    Unknown,
    AtMost(u8),
    Exactly(u8),
}

impl Constraint {
    pub fn admits(&self, score: u8) -> bool {
        match self {
            Self::Unknown => true,
            Self::AtMost(max) => score <= *max,
            Self::Exactly(n) => score == *n,
        }
    }
}

/// u8 isomorphism
impl From<u8> for Constraint {
    fn from(n: u8) -> Self {
        match n {
            UNKNOWN_ENVIDO => Self::Unknown,
            n if n >= SON_BUENAS => Self::AtMost(n - SON_BUENAS),
            n if n == SON_BUENAS - 1 => Self::Unknown,
            n => Self::Exactly(n),
        }
    }
}
impl From<Constraint> for u8 {
    fn from(c: Constraint) -> u8 {
        match c {
            Constraint::Unknown => UNKNOWN_ENVIDO,
            Constraint::AtMost(n) => n.saturating_add(SON_BUENAS),
            Constraint::Exactly(n) => n,
        }
    }
}

/// str isomorphism, "?" / "<=27" / "27"
impl TryFrom<&str> for Constraint {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let parse = |n: &str| {
            n.parse::<u8>()
                .map_err(|_| anyhow::anyhow!("invalid envido constraint: {}", s))
        };
        match s {
            "?" => Ok(Self::Unknown),
            s if s.starts_with("<=") => Ok(Self::AtMost(parse(&s[2..])?)),
            s => Ok(Self::Exactly(parse(s)?)),
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "?"),
            Self::AtMost(n) => write!(f, "<={}", n),
            Self::Exactly(n) => write!(f, "{}", n),
        }
    }
}
