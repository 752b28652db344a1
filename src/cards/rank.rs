use super::card::Card;
use super::number::Number;

/// Statistics grouping label of a card.
///
/// Suit is collapsed except where it changes the truco rank: the bravas
/// (1e 1b 7e 7o, and piezas) keep their suit, the plain 1 and 7 become
/// "falsas" (`1f`, `7f`), and every other number is just its face.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Rank {
    Brava(Card),
    Falsa(Number),
    Plain(Number),
}

impl From<Card> for Rank {
    fn from(card: Card) -> Self {
        if card.truco() > 10 {
            Self::Brava(card)
        } else if matches!(card.number(), Number::One | Number::Seven) {
            Self::Falsa(card.number())
        } else {
            Self::Plain(card.number())
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.strip_suffix('f') {
            Some(n) => match Number::try_from(n)? {
                n @ (Number::One | Number::Seven) => Ok(Self::Falsa(n)),
                n => Err(anyhow::anyhow!("{} has no falsa rank", n)),
            },
            None => match Number::try_from(s) {
                Ok(n) => match n {
                    Number::One | Number::Seven => Err(anyhow::anyhow!("{} needs a suit", s)),
                    n => Ok(Self::Plain(n)),
                },
                Err(_) => match Rank::from(Card::try_from(s)?) {
                    rank @ Self::Brava(_) => Ok(rank),
                    _ => Err(anyhow::anyhow!("{} is not a brava", s)),
                },
            },
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Brava(card) => write!(f, "{}", card),
            Self::Falsa(number) => write!(f, "{}f", number),
            Self::Plain(number) => write!(f, "{}", number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(s: &str) -> String {
        Rank::from(Card::try_from(s).unwrap()).to_string()
    }

    #[test]
    fn labels() {
        assert_eq!(rank("1e"), "1e");
        assert_eq!(rank("7o"), "7o");
        assert_eq!(rank("1c"), "1f");
        assert_eq!(rank("7b"), "7f");
        assert_eq!(rank("2c"), "2");
        assert_eq!(rank("12o"), "12");
        assert_eq!(rank("11p"), "11p");
    }

    #[test]
    fn bijective_str() {
        for n in 0..40u8 {
            let rank = Rank::from(Card::from(n));
            assert!(rank == Rank::try_from(rank.to_string().as_str()).unwrap());
        }
        assert!(Rank::try_from("2f").is_err());
        assert!(Rank::try_from("1c").is_err());
        assert!(Rank::try_from("1").is_err());
    }
}
