use crate::cards::Hand;
use crate::cards::Muestra;
use std::cmp::Ordering;

/// Overall outcome from the three per-round outcomes.
///
/// A tied first round goes to the second (then the third). A tie after a
/// decided first round goes to the first round's winner, as does a tied
/// third round after split first and second rounds.
pub fn resolve(rounds: [Ordering; 3]) -> Ordering {
    use Ordering::Equal;
    match rounds {
        [Equal, Equal, s2] => s2,
        [Equal, s1, _] => s1,
        [s0, Equal, _] => s0,
        [s0, s1, _] if s0 == s1 => s0,
        [s0, _, Equal] => s0,
        [_, _, s2] => s2,
    }
}

/// Play two hands round by round in the given order.
/// `Greater` means `mine` takes the hand.
pub fn compare(mine: &Hand, theirs: &Hand) -> Ordering {
    resolve(std::array::from_fn(|i| {
        mine.card(i).truco().cmp(&theirs.card(i).truco())
    }))
}

/// Same as [`compare`] after both hands are promoted by the muestra.
pub fn compare_uy(mine: &Hand, theirs: &Hand, muestra: &Muestra) -> Ordering {
    compare(&muestra.hand(mine), &muestra.hand(theirs))
}
