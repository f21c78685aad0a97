use std::collections::BTreeSet;

use crate::{Color, Face, InvalidAdjacencyQuery};

/// Every tile code that could legally sit directly beside `face`:
/// the same color one rank up or down, plus the same rank in each of
/// the three other colors.
///
/// This is a pure function of tile identity. It answers "what code could
/// neighbor this one", regardless of whether such a tile is currently on
/// the board. Wildcards have no defined neighbor set, so querying one is
/// an error rather than an empty result.
pub fn possible_adjacent_codes(face: Face) -> Result<BTreeSet<String>, InvalidAdjacencyQuery> {
    let Face::Colored { color, rank } = face else {
        return Err(InvalidAdjacencyQuery);
    };

    let mut codes = BTreeSet::new();
    if let Some(up) = rank.succ() {
        codes.insert(Face::Colored { color, rank: up }.code());
    }
    if let Some(down) = rank.pred() {
        codes.insert(Face::Colored { color, rank: down }.code());
    }
    for other in Color::ALL {
        if other != color {
            codes.insert(Face::Colored { color: other, rank }.code());
        }
    }
    Ok(codes)
}
