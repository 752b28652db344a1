use super::action::Action;
use super::choice::Choice;
use super::declaration::Declaration;
use super::illegal::Illegal;
use super::request::Request;
use super::score::Score;
use super::state::State;
use crate::FALTA_ENVIDO;
use crate::MAX_TRUCO;
use crate::N_PLAYERS;
use crate::N_ROUNDS;
use crate::Position;
use crate::cards::Card;
use crate::truco::resolve;
use std::cmp::Ordering;

/// Protocol state of one truco hand between four players.
///
/// Seats are indexed in play order, counter-clockwise with the dealer last,
/// and teams are seat parity. Every transition goes through [`Match::act`]
/// (or [`Match::apply`] for the non-mutating form), which validates the
/// action against the current [`State`] before touching anything, so a
/// refused action leaves the match exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Match {
    /// cards[seat][round], filled as a prefix per seat
    cards: [[Option<Card>; N_ROUNDS]; N_PLAYERS],
    /// current truco level, 1..=4
    truco: u8,
    /// who raised truco last
    truco_ask: Option<Position>,
    envidos: [Declaration; N_PLAYERS],
    /// envido bet under negotiation or accepted, 0 if never asked
    envido: u8,
    /// what declining the pending envido raise awards the raiser
    envido_no: u8,
    /// who raised envido last
    envido_ask: Option<Position>,
    envido_declined: bool,
    /// who acts next, outside of announcing
    player: Position,
    /// whether a pending raise is an envido raise rather than truco
    is_envido: bool,
    truco_winner: Option<Position>,
    state: State,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    pub fn new() -> Self {
        Self {
            cards: [[None; N_ROUNDS]; N_PLAYERS],
            truco: 1,
            truco_ask: None,
            envidos: [Declaration::Undeclared; N_PLAYERS],
            envido: 0,
            envido_no: 0,
            envido_ask: None,
            envido_declined: false,
            player: 0,
            is_envido: false,
            truco_winner: None,
            state: State::Playing,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }
    pub fn player(&self) -> Position {
        self.player
    }
    pub fn truco(&self) -> u8 {
        self.truco
    }
    pub fn envido(&self) -> u8 {
        self.envido
    }
    pub fn envidos(&self) -> [Declaration; N_PLAYERS] {
        self.envidos
    }
    pub fn is_envido(&self) -> bool {
        self.is_envido
    }
    pub fn truco_winner(&self) -> Option<Position> {
        self.truco_winner
    }
    /// cards a seat has played so far, in order
    pub fn played(&self, seat: Position) -> Vec<Card> {
        self.cards[seat].iter().flatten().copied().collect()
    }
    /// cards every seat except this one has played
    pub fn played_by_others(&self, seat: Position) -> Vec<Card> {
        (0..N_PLAYERS)
            .filter(|&p| p != seat)
            .flat_map(|p| self.played(p))
            .collect()
    }
    /// the round being played, `N_ROUNDS` once every card is down
    pub fn round(&self) -> usize {
        (0..N_PLAYERS)
            .map(|p| self.filled(p))
            .min()
            .unwrap_or(N_ROUNDS)
    }
    /// next seat that has to declare envido, if any
    pub fn envido_player(&self) -> Option<Position> {
        self.envidos.iter().position(|d| !d.is_declared())
    }
    /// Best shown envido and its seat, so far. Son buenas never win,
    /// and ties go to the earlier seat. `(0, 0)` before anyone shows.
    pub fn winner_envido(&self) -> (u8, Position) {
        self.envidos
            .iter()
            .take_while(|d| d.is_declared())
            .enumerate()
            .filter_map(|(seat, d)| d.score().map(|s| (s, seat)))
            .fold(None, |best, (s, seat)| match best {
                Some((b, _)) if b >= s => best,
                _ => Some((s, seat)),
            })
            .unwrap_or((0, 0))
    }

    pub fn score(&self) -> Score {
        let (envido_winner, envido_points) = if self.envido_declined {
            (self.envido_ask, self.envido_no)
        } else if self.envido > 0 && self.envido_player().is_none() {
            (Some(self.winner_envido().1), self.envido)
        } else {
            (None, 0)
        };
        Score {
            truco_winner: self.truco_winner,
            truco_points: self.truco,
            envido_winner,
            envido_points,
        }
    }

    pub fn next(seat: Position) -> Position {
        (seat + 1) % N_PLAYERS
    }
    pub fn prev(seat: Position) -> Position {
        (seat + N_PLAYERS - 1) % N_PLAYERS
    }
    pub fn team(seat: Position) -> usize {
        seat % 2
    }
}

/// legality
impl Match {
    /// The authoritative list of what the current player may do.
    pub fn legal(&self) -> Vec<Choice> {
        let mut options = Vec::new();
        match self.state {
            State::End => {}
            State::Playing => {
                if self.filled(self.player) < N_ROUNDS {
                    options.push(Choice::Play);
                }
                if self.may_ask(Request::Truco).is_ok() {
                    options.push(match self.truco {
                        1 => Choice::AskTruco,
                        2 => Choice::AskRetruco,
                        _ => Choice::AskValeCuatro,
                    });
                }
                options.extend(self.envido_choices());
                options.push(Choice::Fold);
            }
            State::Responding => {
                options.push(Choice::Accept);
                options.extend(self.envido_choices());
                options.push(Choice::FoldNoQuiero);
            }
            State::Announcing => {
                options.push(Choice::Announce);
                options.push(Choice::FoldSonBuenas);
            }
        }
        options
    }

    pub fn is_allowed(&self, action: &Action) -> bool {
        self.check(action).is_ok()
    }

    fn envido_choices(&self) -> Vec<Choice> {
        Request::envidos()
            .into_iter()
            .filter(|r| self.may_ask(*r).is_ok())
            .map(|r| match r {
                Request::RealEnvido => Choice::AskRealEnvido,
                Request::FaltaEnvido => Choice::AskFaltaEnvido,
                _ => Choice::AskEnvido,
            })
            .collect()
    }

    fn check(&self, action: &Action) -> Result<(), Illegal> {
        match action {
            Action::Play(card) => self.may_play(*card),
            Action::Ask(request) => self.may_ask(*request),
            Action::Accept => self.may_accept(),
            Action::Fold => self.may_fold(),
            Action::Announce(score) => self.may_announce(*score),
        }
    }

    fn may_play(&self, card: Card) -> Result<(), Illegal> {
        match self.state {
            State::End => Err(Illegal::Finished),
            State::Responding => Err(Illegal::MustRespond),
            State::Announcing => Err(Illegal::MustAnnounce),
            State::Playing if self.filled(self.player) >= N_ROUNDS => Err(Illegal::SlotsFull),
            State::Playing if card.is_pieza() || self.is_on_table(&card) => {
                Err(Illegal::Unknown(card))
            }
            State::Playing => Ok(()),
        }
    }

    fn may_ask(&self, request: Request) -> Result<(), Illegal> {
        match (self.state, request) {
            (State::End, _) => Err(Illegal::Finished),
            (State::Announcing, _) => Err(Illegal::MustAnnounce),
            (State::Playing, Request::Truco) if self.truco >= MAX_TRUCO => {
                Err(Illegal::TrucoCeiling)
            }
            (State::Playing, Request::Truco) => match self.truco_ask {
                Some(asker) if Self::team(asker) == Self::team(self.player) => {
                    Err(Illegal::TrucoTurn)
                }
                _ => Ok(()),
            },
            (State::Playing, _) if self.round() > 0 || self.envido > 0 => {
                Err(Illegal::EnvidoClosed)
            }
            (State::Playing, _) if self.player < N_PLAYERS / 2 => Err(Illegal::EnvidoTurn),
            (State::Playing, _) => Ok(()),
            (State::Responding, Request::Truco) => Err(Illegal::MustRespond),
            (State::Responding, _) if !self.is_envido => Err(Illegal::MustRespond),
            (State::Responding, Request::Envido) if self.envido != 2 => {
                Err(Illegal::EnvidoCeiling)
            }
            (State::Responding, Request::RealEnvido) if !matches!(self.envido, 2 | 4) => {
                Err(Illegal::EnvidoCeiling)
            }
            (State::Responding, Request::FaltaEnvido) if self.envido == FALTA_ENVIDO => {
                Err(Illegal::EnvidoCeiling)
            }
            (State::Responding, _) => Ok(()),
        }
    }

    fn may_accept(&self) -> Result<(), Illegal> {
        match self.state {
            State::End => Err(Illegal::Finished),
            State::Playing => Err(Illegal::MustPlayOrRaise),
            State::Announcing => Err(Illegal::MustAnnounce),
            State::Responding => Ok(()),
        }
    }

    fn may_fold(&self) -> Result<(), Illegal> {
        match self.state {
            State::End => Err(Illegal::Finished),
            _ => Ok(()),
        }
    }

    fn may_announce(&self, score: u8) -> Result<(), Illegal> {
        match self.state {
            State::End => Err(Illegal::Finished),
            State::Playing => Err(Illegal::MustPlayOrRaise),
            State::Responding => Err(Illegal::MustRespond),
            State::Announcing if !Declaration::is_valid(score) => {
                Err(Illegal::InvalidScore(score))
            }
            State::Announcing => Ok(()),
        }
    }

    fn filled(&self, seat: Position) -> usize {
        self.cards[seat].iter().take_while(|c| c.is_some()).count()
    }
    fn is_on_table(&self, card: &Card) -> bool {
        self.cards.iter().flatten().any(|c| c.as_ref() == Some(card))
    }
}

/// transitions
impl Match {
    /// Copy of the match after the action, or why it was refused.
    pub fn apply(&self, action: Action) -> Result<Self, Illegal> {
        let mut child = *self;
        child.act(action)?;
        Ok(child)
    }

    pub fn act(&mut self, action: Action) -> Result<(), Illegal> {
        let actor = self.envido_player().filter(|_| self.state == State::Announcing);
        let actor = actor.unwrap_or(self.player);
        let result = match action {
            Action::Play(card) => self.play(card),
            Action::Ask(request) => self.ask(request),
            Action::Accept => self.accept(),
            Action::Fold => self.fold(),
            Action::Announce(score) => self.announce(score),
        };
        match result {
            Ok(()) => log::trace!("P{} {:<16} -> {}", actor, action, self.state),
            Err(e) => log::trace!("P{} {:<16} refused: {}", actor, action, e),
        }
        result
    }

    /// Current player puts a card down.
    pub fn play(&mut self, card: Card) -> Result<(), Illegal> {
        self.may_play(card)?;
        let slot = self.filled(self.player);
        self.cards[self.player][slot] = Some(card);
        self.player = Self::next(self.player);
        if self.round() == N_ROUNDS {
            self.truco_winner = Some(self.showdown());
            self.state = State::End;
        }
        Ok(())
    }

    /// Current player raises truco, opens envido, or re-raises envido.
    pub fn ask(&mut self, request: Request) -> Result<(), Illegal> {
        self.may_ask(request)?;
        match (self.state, request) {
            (State::Playing, Request::Truco) => {
                self.truco_ask = Some(self.player);
                self.is_envido = false;
            }
            (State::Playing, _) => {
                self.envido_ask = Some(self.player);
                self.envido_no = 1;
                self.envido = request.raise(0);
                self.is_envido = true;
            }
            _ => {
                self.envido_ask = self.envido_ask.map(Self::next).or(Some(self.player));
                self.envido_no = self.envido;
                self.envido = request.raise(self.envido);
            }
        }
        self.state = State::Responding;
        Ok(())
    }

    /// Quiero. Truco goes up a level, envido moves on to declaring.
    pub fn accept(&mut self) -> Result<(), Illegal> {
        self.may_accept()?;
        if self.is_envido {
            self.state = State::Announcing;
        } else {
            self.truco += 1;
            self.state = State::Playing;
        }
        Ok(())
    }

    /// Means no quiero while responding, son buenas while announcing,
    /// and giving the hand away while playing.
    pub fn fold(&mut self) -> Result<(), Illegal> {
        self.may_fold()?;
        match self.state {
            State::Playing => {
                self.truco_winner = Some(Self::prev(self.player));
                self.state = State::End;
            }
            State::Responding if self.is_envido => {
                self.is_envido = false;
                self.envido_declined = true;
                self.state = State::Playing;
            }
            State::Responding => {
                self.truco_winner = self.truco_ask.or(Some(self.player));
                self.state = State::End;
            }
            State::Announcing => {
                self.concede();
                self.close_envido();
            }
            State::End => {}
        }
        Ok(())
    }

    /// Next undeclared seat shows its envido. A score that does not beat
    /// the best shown so far is recorded as son buenas.
    pub fn announce(&mut self, score: u8) -> Result<(), Illegal> {
        self.may_announce(score)?;
        let Some(seat) = self.envido_player() else {
            return Err(Illegal::MustPlayOrRaise);
        };
        let shown = self.envidos.iter().any(|d| d.score().is_some());
        let (highest, _) = self.winner_envido();
        if shown && score <= highest {
            self.concede();
        } else {
            self.envidos[seat] = Declaration::Score(score);
        }
        self.close_envido();
        Ok(())
    }

    fn concede(&mut self) {
        if let Some(seat) = self.envido_player() {
            self.envidos[seat] = Declaration::SonBuenas(self.winner_envido().0);
        }
    }

    fn close_envido(&mut self) {
        if self.envido_player().is_none() {
            self.is_envido = false;
            self.state = State::Playing;
        }
    }

    /// Winner of a fully played grid: each team's best card takes or ties
    /// the round, rounds resolve like a two-hand comparison, and a full tie
    /// goes to the mano's team.
    fn showdown(&self) -> Position {
        let best = |team: usize, round: usize| {
            (0..N_PLAYERS)
                .filter(|&p| Self::team(p) == team)
                .filter_map(|p| self.cards[p][round])
                .map(|c| c.truco())
                .max()
                .unwrap_or(0)
        };
        match resolve(std::array::from_fn(|r| best(0, r).cmp(&best(1, r)))) {
            Ordering::Less => 1,
            _ => 0,
        }
    }
}

/// invariants
impl Match {
    /// Check what a decoded match could have gotten wrong.
    pub fn validate(&self) -> anyhow::Result<()> {
        let seat = |p: Option<Position>| p.is_none_or(|p| p < N_PLAYERS);
        if self.player >= N_PLAYERS
            || !seat(self.truco_ask)
            || !seat(self.envido_ask)
            || !seat(self.truco_winner)
        {
            return Err(anyhow::anyhow!("seat out of range"));
        }
        if !(1..=MAX_TRUCO).contains(&self.truco) {
            return Err(anyhow::anyhow!("truco level out of range: {}", self.truco));
        }
        if self.envido > FALTA_ENVIDO || self.envido_no > FALTA_ENVIDO {
            return Err(anyhow::anyhow!("envido bet out of range: {}", self.envido));
        }
        for row in self.cards.iter() {
            if row.iter().skip_while(|c| c.is_some()).any(|c| c.is_some()) {
                return Err(anyhow::anyhow!("gap in played cards"));
            }
        }
        let cards = self.cards.iter().flatten().flatten().collect::<Vec<_>>();
        if cards.iter().any(|c| c.is_pieza()) {
            return Err(anyhow::anyhow!("pieza on the table"));
        }
        if (1..cards.len()).any(|i| cards[..i].contains(&cards[i])) {
            return Err(anyhow::anyhow!("card played twice"));
        }
        Ok(())
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} P{} truco {} envido {}", self.state, self.player, self.truco, self.envido)?;
        for seat in 0..N_PLAYERS {
            let cards = self.cards[seat]
                .iter()
                .map(|c| c.map(|c| c.to_string()).unwrap_or("..".into()))
                .collect::<Vec<_>>();
            writeln!(f, "P{} {:<12} {}", seat, cards.join(" "), self.envidos[seat])?;
        }
        Ok(())
    }
}
