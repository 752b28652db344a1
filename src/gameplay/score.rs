use crate::Position;

/// Points at stake and who has taken them, so far.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub struct Score {
    /// a seat of the team that won the truco hand, if decided
    pub truco_winner: Option<Position>,
    /// current truco level
    pub truco_points: u8,
    /// a seat of the team that won envido, if decided
    pub envido_winner: Option<Position>,
    /// accepted envido bet, or the no-quiero value if it was declined
    pub envido_points: u8,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let seat = |p: Option<Position>| p.map(|p| p.to_string()).unwrap_or("-".into());
        write!(
            f,
            "truco {} to {} / envido {} to {}",
            self.truco_points,
            seat(self.truco_winner),
            self.envido_points,
            seat(self.envido_winner),
        )
    }
}
