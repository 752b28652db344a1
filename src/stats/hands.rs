use crate::HAND_COLUMNS;
use crate::MAX_ENVIDO;
use crate::Probability;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::combinatorics::combinations;
use crate::gameplay::Filter;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// One row of the hand table.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    /// cards sorted by truco rank, highest first
    pub hand: Hand,
    pub strength: Probability,
    pub envido: u8,
    pub combined: Probability,
}

impl From<Hand> for Row {
    fn from(hand: Hand) -> Self {
        let strength = hand.strength();
        let envido = hand.envido();
        Self {
            hand: hand.truco_sorted(),
            strength,
            envido,
            combined: Self::combined(strength, envido),
        }
    }
}

impl Row {
    /// both tracks on a common [0, 1] scale, averaged
    pub fn combined(strength: Probability, envido: u8) -> Probability {
        (envido as Probability / MAX_ENVIDO as Probability + strength) / 2.
    }
}

/// All 9880 three-card hands of the deck.
pub fn all_hands() -> Vec<Hand> {
    combinations(&Deck::full().cards(), 3)
        .filter_map(|cards| Hand::try_from(cards.as_slice()).ok())
        .collect()
}

/// Rows the filter admits.
pub fn lookup<'a>(rows: &'a [Row], filter: &'a Filter) -> impl Iterator<Item = &'a Row> {
    rows.iter().filter(|row| filter.admits(&row.hand, row.envido))
}

/// Write rows sorted by strength, strongest first.
/// Goes through a sibling temporary file so a failed run leaves nothing behind.
pub fn write_table(path: &Path, mut rows: Vec<Row>) -> anyhow::Result<()> {
    rows.sort_by(|a, b| b.strength.total_cmp(&a.strength));
    commit(path, |tmp| {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(tmp)?;
        writer.write_record(HAND_COLUMNS)?;
        for row in rows.iter() {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    })?;
    log::info!("wrote {} hands to {}", rows.len(), path.display());
    Ok(())
}

pub fn read_table(path: &Path) -> anyhow::Result<Vec<Row>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("could not open {}", path.display()))?;
    let header = reader.headers()?.iter().collect::<Vec<_>>();
    if header != HAND_COLUMNS {
        return Err(anyhow::anyhow!(
            "{} is not a hand table: {:?}",
            path.display(),
            header
        ));
    }
    reader
        .deserialize::<Row>()
        .map(|row| row.with_context(|| format!("bad row in {}", path.display())))
        .collect()
}

/// Run `write` against the staging file of `path`, then move it into place.
/// On any failure the staging file is removed and `path` is left untouched.
pub(crate) fn commit<F>(path: &Path, write: F) -> anyhow::Result<()>
where
    F: FnOnce(&Path) -> anyhow::Result<()>,
{
    let tmp = staging(path);
    let result = write(tmp.as_path())
        .with_context(|| format!("could not write {}", tmp.display()))
        .and_then(|_| {
            std::fs::rename(&tmp, path)
                .with_context(|| format!("could not move {} into place", path.display()))
        });
    if result.is_err() && tmp.exists() {
        if let Err(e) = std::fs::remove_file(&tmp) {
            log::warn!("could not remove {}: {}", tmp.display(), e);
        }
    }
    result
}

pub(crate) fn staging(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::envido::Constraint;

    fn row(hand: &str, strength: Probability) -> Row {
        let hand = Hand::try_from(hand).unwrap();
        Row {
            hand,
            strength,
            envido: hand.envido(),
            combined: Row::combined(strength, hand.envido()),
        }
    }

    #[test]
    fn every_hand_once() {
        let hands = all_hands();
        assert_eq!(hands.len(), 9880);
        assert!(hands.iter().all(|h| h.is_distinct()));
    }

    #[test]
    fn combined_scale() {
        assert_eq!(Row::combined(1., 33), 1.);
        assert_eq!(Row::combined(0., 0), 0.);
        assert_eq!(Row::combined(0.5, 0), 0.25);
    }

    #[test]
    fn sorted_row() {
        let row = Row::from(Hand::try_from("4c 1e 7o").unwrap());
        assert!(row.hand == Hand::try_from("1e 7o 4c").unwrap());
        assert_eq!(row.envido, 7);
    }

    #[test]
    fn lookup_by_filter() {
        let rows = vec![row("1e 7o 4c", 0.9), row("6e 7e 12c", 0.4), row("1b 3b 5o", 0.7)];
        let filter = Filter {
            known: vec![Card::try_from("7o").unwrap()],
            mine: vec![],
            envido: Constraint::AtMost(30),
        };
        let found = lookup(&rows, &filter).collect::<Vec<_>>();
        assert_eq!(found.len(), 1);
        assert!(found[0].hand == rows[2].hand);
    }

    #[test]
    fn table_file() {
        let path = std::env::temp_dir().join(format!("truco-hands-{}.csv", std::process::id()));
        let rows = vec![row("6e 7e 12c", 0.4), row("1e 7o 4c", 0.9)];
        write_table(&path, rows.clone()).unwrap();
        assert!(!staging(&path).exists());
        let back = read_table(&path).unwrap();
        assert!(back == vec![rows[1], rows[0]]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn failed_write_leaves_nothing() {
        let path = std::env::temp_dir().join(format!("truco-failed-{}.csv", std::process::id()));
        let result = commit(&path, |tmp| {
            std::fs::write(tmp, "hand,strength\n")?;
            Err(anyhow::anyhow!("interrupted"))
        });
        assert!(result.is_err());
        assert!(!staging(&path).exists());
        assert!(!path.exists());
    }
}
