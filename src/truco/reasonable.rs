use crate::cards::Hand;

/// Heuristic filter over complete play sequences.
///
/// `first` leads round 0 and `second` answers. Whoever answers a round is
/// expected to spend the cheapest card that still wins it, or the cheapest
/// card overall when it cannot win. A side that lost round 0 must win round
/// 1 if it holds a card that can. After a tied round 0 the answering side
/// plays its stronger remaining card. Round 2 is forced and always passes.
///
/// This is an approximation of sensible play, not a solver.
pub fn is_reasonably_played(first: &Hand, second: &Hand) -> bool {
    let [m0, m1, m2] = first.cards().map(|c| c.truco());
    let [o0, o1, o2] = second.cards().map(|c| c.truco());

    // round 0, second answers
    if o0 > m0 && ((o1 > m0 && o1 < o0) || (o2 > m0 && o2 < o0)) {
        return false;
    }
    if o0 < m0 && ((o1 < m0 && o1 < o0) || (o2 < m0 && o2 < o0)) {
        return false;
    }

    // round 1, the loser of round 0 answers
    if o0 > m0 {
        if m1 > o1 {
            !(m2 > o1 && m2 < m1)
        } else {
            !(m2 > o1) && !(m2 < o1 && m2 < m1)
        }
    } else if o0 == m0 {
        o2 <= o1
    } else if o1 > m1 {
        !(o2 > m1 && o2 < o1)
    } else {
        !(o2 > m1) && !(o1 < m1 && o2 < m1 && o2 < o1)
    }
}
