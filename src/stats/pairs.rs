use super::hands::Row;
use super::hands::commit;
use crate::Probability;
use crate::cards::Rank;
use crate::combinatorics::mean;
use crate::combinatorics::median;
use crate::gameplay::Filter;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::Path;

/// Summary of every hand sharing the same two strongest ranks.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PairStat {
    /// rank labels of the two strongest cards, "1e 7f"
    pub pair: String,
    /// whether the group holds envido of 20 or more
    pub is_envido: bool,
    pub truco_max: Probability,
    pub truco_min: Probability,
    pub truco_mean: Probability,
    pub truco_median: Probability,
    pub envido_max: u8,
    pub envido_min: u8,
    pub envido_mean: Probability,
    pub envido_median: Probability,
    pub combined_mean: Probability,
    pub count: usize,
}

impl PairStat {
    fn new(pair: String, is_envido: bool, samples: Vec<(Probability, u8)>) -> Self {
        let mut truco = samples.iter().map(|(t, _)| *t).collect::<Vec<_>>();
        let mut envido = samples.iter().map(|(_, e)| *e).collect::<Vec<_>>();
        truco.sort_by(|a, b| a.total_cmp(b));
        envido.sort();
        let truco_mean = mean(&truco).unwrap_or_default() as Probability;
        let envido_mean = mean(&envido).unwrap_or_default() as Probability;
        Self {
            pair,
            is_envido,
            truco_max: truco.last().copied().unwrap_or_default(),
            truco_min: truco.first().copied().unwrap_or_default(),
            truco_mean,
            truco_median: median(&truco).unwrap_or_default() as Probability,
            envido_max: envido.last().copied().unwrap_or_default(),
            envido_min: envido.first().copied().unwrap_or_default(),
            envido_mean,
            envido_median: median(&envido).unwrap_or_default() as Probability,
            combined_mean: (truco_mean + envido_mean / crate::MAX_ENVIDO as Probability) / 2.,
            count: samples.len(),
        }
    }

    pub fn key(&self) -> String {
        format!("{} {}", self.pair, self.is_envido)
    }
}

/// Group label of a row: its two strongest ranks.
fn pair(row: &Row) -> String {
    let cards = row.hand.truco_sorted().cards();
    format!("{} {}", Rank::from(cards[0]), Rank::from(cards[1]))
}

/// Group the rows the filter admits by pair, and optionally by envido tier.
pub fn aggregate(rows: &[Row], filter: &Filter, by_envido: bool) -> BTreeMap<String, PairStat> {
    let groups = rows
        .par_iter()
        .filter(|row| filter.admits(&row.hand, row.envido))
        .fold(HashMap::<(String, bool), Vec<(Probability, u8)>>::new, |mut groups, row| {
            let tier = by_envido && row.envido >= 20;
            groups
                .entry((pair(row), tier))
                .or_default()
                .push((row.strength, row.envido));
            groups
        })
        .reduce(HashMap::new, |mut a, b| {
            for (k, v) in b {
                a.entry(k).or_default().extend(v);
            }
            a
        });
    log::info!("aggregated {} hands into {} pairs", groups.values().map(Vec::len).sum::<usize>(), groups.len());
    groups
        .into_iter()
        .map(|((pair, tier), samples)| PairStat::new(pair, tier, samples))
        .map(|stat| (stat.key(), stat))
        .collect()
}

pub fn write_pairs(path: &Path, stats: &BTreeMap<String, PairStat>) -> anyhow::Result<()> {
    commit(path, |tmp| {
        let mut writer = csv::Writer::from_path(tmp)?;
        for stat in stats.values() {
            writer.serialize(stat)?;
        }
        writer.flush()?;
        Ok(())
    })?;
    log::info!("wrote {} pairs to {}", stats.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;
    use crate::stats::hands::staging;

    fn row(hand: &str, strength: Probability) -> Row {
        let hand = Hand::try_from(hand).unwrap();
        Row {
            hand,
            strength,
            envido: hand.envido(),
            combined: Row::combined(strength, hand.envido()),
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            row("1e 7o 4c", 0.9),
            row("1e 7o 5c", 0.8),
            row("1e 7o 6o", 0.7),
            row("3e 3b 2o", 0.5),
        ]
    }

    #[test]
    fn groups_by_pair() {
        let stats = aggregate(&rows(), &Filter::default(), false);
        assert_eq!(stats.len(), 2);
        let stat = &stats["1e 7o false"];
        assert_eq!(stat.count, 3);
        assert_eq!(stat.truco_max, 0.9);
        assert_eq!(stat.truco_min, 0.7);
        assert_eq!(stat.truco_median, 0.8);
        assert_eq!(stat.envido_max, 33);
        assert_eq!(stat.envido_min, 7);
        assert!(stats.contains_key("3 3 false"));
    }

    #[test]
    fn groups_by_envido_tier() {
        let stats = aggregate(&rows(), &Filter::default(), true);
        assert_eq!(stats.len(), 3);
        assert_eq!(stats["1e 7o true"].count, 1);
        assert_eq!(stats["1e 7o false"].count, 2);
        assert_eq!(stats["1e 7o true"].envido_mean, 33.);
    }

    #[test]
    fn pairs_file() {
        let path = std::env::temp_dir().join(format!("truco-pairs-{}.csv", std::process::id()));
        let stats = aggregate(&rows(), &Filter::default(), true);
        write_pairs(&path, &stats).unwrap();
        assert!(!staging(&path).exists());
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(
            text.lines().next()
                == Some(
                    "pair,is_envido,truco_max,truco_min,truco_mean,truco_median,\
                     envido_max,envido_min,envido_mean,envido_median,combined_mean,count"
                )
        );
        let back = csv::Reader::from_path(&path)
            .unwrap()
            .deserialize::<PairStat>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert!(back == stats.values().cloned().collect::<Vec<_>>());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn pair_labels() {
        assert!(pair(&row("4c 1c 7b", 0.)) == "1f 7f");
        assert!(pair(&row("12c 7e 11c", 0.)) == "7e 12");
    }
}
