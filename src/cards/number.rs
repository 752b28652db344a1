/// Face number of a card. The Spanish deck used for truco skips 8 and 9.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Number {
    #[default]
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Sota = 10,
    Caballo = 11,
    Rey = 12,
}

impl Number {
    pub const fn all() -> [Number; 10] {
        [
            Number::One,
            Number::Two,
            Number::Three,
            Number::Four,
            Number::Five,
            Number::Six,
            Number::Seven,
            Number::Sota,
            Number::Caballo,
            Number::Rey,
        ]
    }
    /// 10, 11 and 12 are figures and count zero for envido.
    pub fn is_figure(&self) -> bool {
        matches!(self, Number::Sota | Number::Caballo | Number::Rey)
    }
    /// Envido value of the number, 0 for figures.
    pub fn envido(&self) -> u8 {
        if self.is_figure() { 0 } else { u8::from(*self) }
    }
    /// dense position 0..10, used for the card index
    pub fn index(&self) -> u8 {
        match self {
            Number::Sota => 7,
            Number::Caballo => 8,
            Number::Rey => 9,
            n => u8::from(*n) - 1,
        }
    }
    pub fn from_index(i: u8) -> Self {
        Self::all()[i as usize]
    }
}

/// face value
impl From<Number> for u8 {
    fn from(n: Number) -> u8 {
        n as u8
    }
}
impl TryFrom<u8> for Number {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Number::One),
            2 => Ok(Number::Two),
            3 => Ok(Number::Three),
            4 => Ok(Number::Four),
            5 => Ok(Number::Five),
            6 => Ok(Number::Six),
            7 => Ok(Number::Seven),
            10 => Ok(Number::Sota),
            11 => Ok(Number::Caballo),
            12 => Ok(Number::Rey),
            _ => Err(anyhow::anyhow!("invalid card number: {}", n)),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Number {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| anyhow::anyhow!("invalid card number str: {}", s))
            .and_then(Number::try_from)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_index() {
        for (i, n) in Number::all().into_iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(Number::from_index(i as u8), n);
        }
    }

    #[test]
    fn figures_have_no_envido() {
        assert_eq!(Number::Rey.envido(), 0);
        assert_eq!(Number::Sota.envido(), 0);
        assert_eq!(Number::Seven.envido(), 7);
        assert!(Number::try_from(8u8).is_err());
        assert!(Number::try_from("9").is_err());
    }
}
