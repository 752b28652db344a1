use crate::Probability;
use crate::cards::Hand;

/// One play order of my hand and how it fared.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Line {
    /// my cards in the order they get played
    pub hand: Hand,
    /// win probability given this order was played
    pub strength: Probability,
    /// strength weighted by this order's share of all samples
    pub share: Probability,
    pub count: usize,
}

/// Result of a brute-force strength evaluation.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct TrucoStats {
    strength: Probability,
    count: usize,
    lines: Vec<Line>,
}

impl TrucoStats {
    /// Normalize accumulated (order, raw score, samples) triples.
    pub fn from_raw(raw: Vec<(Hand, i64, usize)>) -> Self {
        let score = raw.iter().map(|(_, s, _)| s).sum::<i64>();
        let count = raw.iter().map(|(_, _, c)| c).sum::<usize>();
        let lines = raw
            .into_iter()
            .map(|(hand, s, c)| {
                let strength = Self::normalize(s, c);
                let share = match count {
                    0 => 0.,
                    n => strength * c as Probability / n as Probability,
                };
                Line {
                    hand,
                    strength,
                    share,
                    count: c,
                }
            })
            .collect();
        Self {
            strength: Self::normalize(score, count),
            count,
            lines,
        }
    }

    /// (raw / samples + 1) / 2, or zero without samples
    fn normalize(score: i64, count: usize) -> Probability {
        match count {
            0 => 0.,
            n => (score as Probability / n as Probability + 1.) / 2.,
        }
    }

    pub fn strength(&self) -> Probability {
        self.strength
    }
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
    /// Strongest play order among those that saw any samples.
    pub fn best(&self) -> Option<&Line> {
        self.lines
            .iter()
            .filter(|l| l.count > 0)
            .max_by(|a, b| a.strength.total_cmp(&b.strength))
    }
}

impl std::fmt::Display for TrucoStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.count == 0 {
            if self.lines.is_empty() {
                return writeln!(f, "empty stats");
            }
            for line in self.lines.iter() {
                writeln!(f, "{}", line.hand)?;
            }
            writeln!(f, "0 permutations simulated")?;
            writeln!(f, "hand is probably played sub-optimally")
        } else {
            writeln!(f, "overall strength={:.3}", self.strength)?;
            for line in self.lines.iter() {
                writeln!(
                    f,
                    "{}: strength={:.3}, of={}",
                    line.hand, line.strength, line.count
                )?;
            }
            writeln!(f, "{} permutations simulated", self.count)
        }
    }
}
