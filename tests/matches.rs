//! Matches played end to end, reloading from a token after every action
//! the way a stateless front end would.
use truco::cards::Card;
use truco::cards::Hand;
use truco::envido::Constraint;
use truco::gameplay::Action;
use truco::gameplay::Choice;
use truco::gameplay::Declaration;
use truco::gameplay::Illegal;
use truco::gameplay::Match;
use truco::gameplay::State;

/// Decode, act, re-encode.
fn step(token: &str, action: &str) -> String {
    let mut game = Match::decode(token);
    let action = Action::try_from(action).unwrap();
    game.act(action)
        .unwrap_or_else(|e| panic!("{} refused: {}\n{}", action, e, game));
    game.encode()
}

fn replay(actions: &[&str]) -> String {
    actions
        .iter()
        .fold(Match::new().encode(), |token, action| step(&token, action))
}

const OPENING: [&str; 2] = ["play 4b", "play 6e"];
const ENVIDO: [&str; 6] = [
    "ask envido",
    "accept",
    "announce 5",
    "announce 7",
    "announce 33",
    "announce 2",
];
const TRUCO: [&str; 12] = [
    "play 3b",
    "play 2o",
    "ask truco",
    "accept",
    "play 1e",
    "play 7o",
    "play 7c",
    "play 12e",
    "play 5c",
    "play 10b",
    "play 6c",
    "play 11b",
];

#[test]
fn full_match_through_tokens() {
    let actions = [OPENING.as_slice(), &ENVIDO, &TRUCO].concat();
    let game = Match::decode(&replay(&actions));
    assert!(game.state() == State::End);
    let score = game.score();
    assert!(score.truco_winner == Some(0));
    assert_eq!(score.truco_points, 2);
    assert!(score.envido_winner == Some(2));
    assert_eq!(score.envido_points, 2);
    assert!(game.envidos()[3] == Declaration::SonBuenas(33));
}

#[test]
fn pie_may_open_envido() {
    let game = Match::decode(&replay(&OPENING));
    assert_eq!(game.player(), 2);
    assert!(
        game.legal()
            == vec![
                Choice::Play,
                Choice::AskTruco,
                Choice::AskEnvido,
                Choice::AskRealEnvido,
                Choice::AskFaltaEnvido,
                Choice::Fold,
            ]
    );
}

#[test]
fn tokens_preserve_legal_actions() {
    let actions = [OPENING.as_slice(), &ENVIDO[..3]].concat();
    let mut game = Match::new();
    for action in actions.iter() {
        game.act(Action::try_from(*action).unwrap()).unwrap();
        let decoded = Match::decode(&game.encode());
        assert!(decoded == game);
        assert!(decoded.legal() == game.legal());
    }
    assert!(game.state() == State::Announcing);
    assert!(game.envido_player() == Some(1));
}

#[test]
fn refused_actions_keep_the_token() {
    let token = replay(&OPENING);
    let game = Match::decode(&token);
    assert!(game.apply(Action::Accept) == Err(Illegal::MustPlayOrRaise));
    assert!(game.apply(Action::Play(Card::try_from("4b").unwrap())).is_err());
    assert!(game.encode() == token);
}

#[test]
fn odds_follow_the_table() {
    let mine = Hand::try_from("1e 4b 5c").unwrap();
    let before = Match::decode(&replay(&OPENING));
    let open = before.odds(0, &mine, false);
    assert_eq!(open.lines().len(), 6);
    assert!(open.count() > 0);

    let after = Match::decode(&replay(&[OPENING.as_slice(), &ENVIDO].concat()));
    assert!(after.filter(1).envido == Constraint::Exactly(7));
    assert!(after.filter(1).admits(&Hand::try_from("7o 6e 10b").unwrap(), 7));
    let declared = after.odds(0, &mine, false);
    assert!(declared.count() > 0);
    assert!(declared.count() < open.count());
}
