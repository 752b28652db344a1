/// Card suit of the Spanish deck: espada, basto, oro, copa.
///
/// `Pieza` is not a real suit. It only appears after a [`Muestra`] promotes
/// a card under the Uruguayan rules, and never belongs to the 40-card deck.
///
/// [`Muestra`]: super::muestra::Muestra
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Espada = 0,
    Basto = 1,
    Oro = 2,
    Copa = 3,
    Pieza = 4,
}

impl Suit {
    /// The four real suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::Espada, Suit::Basto, Suit::Oro, Suit::Copa]
    }
    pub fn is_pieza(&self) -> bool {
        matches!(self, Suit::Pieza)
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Espada,
            1 => Suit::Basto,
            2 => Suit::Oro,
            3 => Suit::Copa,
            4 => Suit::Pieza,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// char isomorphism
impl TryFrom<char> for Suit {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'e' => Ok(Suit::Espada),
            'b' => Ok(Suit::Basto),
            'o' => Ok(Suit::Oro),
            'c' => Ok(Suit::Copa),
            'p' => Ok(Suit::Pieza),
            _ => Err(anyhow::anyhow!("invalid suit char: {}", c)),
        }
    }
}
impl From<Suit> for char {
    fn from(s: Suit) -> char {
        match s {
            Suit::Espada => 'e',
            Suit::Basto => 'b',
            Suit::Oro => 'o',
            Suit::Copa => 'c',
            Suit::Pieza => 'p',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
