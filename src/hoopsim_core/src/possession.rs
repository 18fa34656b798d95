use crate::prob::RandomSource;
use crate::side::Side;
use crate::team::Team;

/// Play one possession and return the side that has the ball next.
///
/// A made shot hands the ball over. A miss gets exactly one rebound
/// contest: the offense keeps the ball if it wins it, otherwise the defense
/// takes over. Keeping the ball means the offense shoots again on the next
/// call; there is no loop in here.
pub fn resolve_possession<S: RandomSource + ?Sized>(
    offense: &mut Team,
    defense: &mut Team,
    source: &mut S,
) -> Side {
    if offense.attempt_shot(source) {
        return defense.side();
    }

    if offense.contest_offensive_rebound(defense, source) {
        offense.side()
    } else {
        defense.side()
    }
}

/// Split a side-indexed pair into `(offense, defense)`.
pub fn offense_and_defense(teams: &mut [Team; 2], offense: Side) -> (&mut Team, &mut Team) {
    let [a, b] = teams;
    match offense {
        Side::A => (a, b),
        Side::B => (b, a),
    }
}
