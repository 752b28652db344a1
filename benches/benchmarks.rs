criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        scoring_random_envido,
        comparing_random_hands,
        exhausting_envido_range,
        evaluating_constrained_strength,
        evaluating_unconstrained_strength,
        evaluating_muestra_strength,
        playing_random_match,
}

fn scoring_random_envido(c: &mut criterion::Criterion) {
    let hand = Hand::random();
    c.bench_function("score envido of a random Hand", |b| b.iter(|| hand.envido()));
}

fn comparing_random_hands(c: &mut criterion::Criterion) {
    let mine = Hand::random();
    let theirs = Hand::random();
    c.bench_function("compare two random Hands over three rounds", |b| {
        b.iter(|| compare(&mine, &theirs))
    });
}

fn exhausting_envido_range(c: &mut criterion::Criterion) {
    c.bench_function("enumerate hands under son buenas 27", |b| {
        b.iter(|| range(Constraint::AtMost(27), &[], &[]).len())
    });
}

fn evaluating_constrained_strength(c: &mut criterion::Criterion) {
    let hand = Hand::random();
    c.bench_function("brute force truco stats with strategy filter", |b| {
        b.iter(|| hand.truco_stats(&[], &[], Constraint::Unknown, true, true))
    });
}

fn evaluating_unconstrained_strength(c: &mut criterion::Criterion) {
    let hand = Hand::random();
    c.bench_function("brute force unconstrained strength", |b| {
        b.iter(|| hand.strength())
    });
}

fn evaluating_muestra_strength(c: &mut criterion::Criterion) {
    let hand = Hand::random();
    c.bench_function("brute force strength over every muestra", |b| {
        b.iter(|| hand.strength_uy())
    });
}

fn playing_random_match(c: &mut criterion::Criterion) {
    c.bench_function("play a random Match to the end", |b| {
        b.iter(|| {
            let ref mut rng = rand::rng();
            let mut game = Match::new();
            let mut deck = Deck::full().cards();
            deck.shuffle(rng);
            while !game.state().is_terminal() {
                match game.legal().choose(rng) {
                    Some(Choice::Play) => match deck.pop() {
                        Some(card) => game.play(card).ok(),
                        None => game.fold().ok(),
                    },
                    Some(Choice::Announce) => game.announce(20).ok(),
                    Some(Choice::Accept) => game.accept().ok(),
                    _ => game.fold().ok(),
                };
            }
            game.score()
        })
    });
}

use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;
use truco::Arbitrary;
use truco::cards::Deck;
use truco::cards::Hand;
use truco::envido::Constraint;
use truco::envido::range;
use truco::gameplay::Choice;
use truco::gameplay::Match;
use truco::truco::compare;
