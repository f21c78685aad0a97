use rand::rngs::StdRng;
use rand::Rng;

use crate::{Color, EmptyPile, Face, Rank, Tile, TileId};

/// Total tile count: 2 copies x 4 colors x ranks 1-13, plus 2 wildcards.
pub const DECK_SIZE: usize = 106;

/// Tiles dealt to each player at game start.
pub const HAND_SIZE: usize = 14;

/// Builds the full deck in deterministic order: two complete color/rank
/// cycles, then the two wildcards. Ids run sequentially from 0 and equal
/// each tile's position in the returned vector.
///
/// The caller shuffles the resulting pile; construction itself is fixed
/// so that ids are stable across games.
pub fn starting_deck() -> Vec<Tile> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _ in 0..2 {
        for color in Color::ALL {
            for value in 1..=13 {
                let face = Face::Colored {
                    color,
                    rank: Rank::new(value).unwrap(),
                };
                deck.push(Tile::new(TileId(deck.len() as u16), face));
            }
        }
    }
    for _ in 0..2 {
        deck.push(Tile::new(TileId(deck.len() as u16), Face::Wildcard));
    }
    deck
}

/// Deals `count` tiles by repeatedly removing a uniformly random index
/// from the pile, like pulling from a face-down pool.
///
/// Fails without drawing anything if the pile holds fewer than `count`
/// tiles.
pub fn deal(
    pile: &mut Vec<TileId>,
    rng: &mut StdRng,
    count: usize,
) -> Result<Vec<TileId>, EmptyPile> {
    if count > pile.len() {
        return Err(EmptyPile {
            requested: count,
            remaining: pile.len(),
        });
    }
    let mut hand = Vec::with_capacity(count);
    for _ in 0..count {
        let idx = rng.gen_range(0..pile.len());
        hand.push(pile.remove(idx));
    }
    Ok(hand)
}
