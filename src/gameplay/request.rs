use crate::FALTA_ENVIDO;

/// A bet raise. The discriminant is what an envido raise puts at stake.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Request {
    /// next truco level
    Truco = 0,
    Envido = 2,
    RealEnvido = 3,
    /// the rest of the game
    FaltaEnvido = 99,
}

impl Request {
    pub const fn envidos() -> [Request; 3] {
        [Request::Envido, Request::RealEnvido, Request::FaltaEnvido]
    }
    /// Envido bet after this raise lands on top of `bet`.
    pub fn raise(&self, bet: u8) -> u8 {
        match self {
            Self::Truco => bet,
            Self::FaltaEnvido => FALTA_ENVIDO,
            other => bet + *other as u8,
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Request {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "truco" => Ok(Self::Truco),
            "envido" => Ok(Self::Envido),
            "real" | "real_envido" => Ok(Self::RealEnvido),
            "falta" | "falta_envido" => Ok(Self::FaltaEnvido),
            _ => Err(anyhow::anyhow!("invalid request: {}", s)),
        }
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Truco => write!(f, "truco"),
            Self::Envido => write!(f, "envido"),
            Self::RealEnvido => write!(f, "real_envido"),
            Self::FaltaEnvido => write!(f, "falta_envido"),
        }
    }
}
