use crate::{Board, Cell, Color, Face, Rank, Tile, TileId, Track, TRACK_COLS, TRACK_ROWS};

impl quickcheck::Arbitrary for Color {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Color::ALL).unwrap()
    }
}

impl quickcheck::Arbitrary for Rank {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Rank::new(u8::arbitrary(g) % 13 + 1).unwrap()
    }
}

impl quickcheck::Arbitrary for Face {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Wildcards show up occasionally, roughly matching deck odds.
        if u8::arbitrary(g) % 16 == 0 {
            Face::Wildcard
        } else {
            Face::Colored {
                color: Color::arbitrary(g),
                rank: Rank::arbitrary(g),
            }
        }
    }
}

impl quickcheck::Arbitrary for Track {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Track::BOTH).unwrap()
    }
}

impl quickcheck::Arbitrary for Cell {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Cell {
            track: Track::arbitrary(g),
            row: u8::arbitrary(g) % TRACK_ROWS,
            col: u8::arbitrary(g) % TRACK_COLS,
        }
    }
}

/// A random but structurally valid board, plus a tile to find targets
/// for.
#[derive(Clone, Debug)]
pub struct PlaceTileInput {
    pub board: Board,
    pub selected: Tile,
}

impl quickcheck::Arbitrary for PlaceTileInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut board = Board::new();
        let mut next_id = 0u16;
        for _ in 0..(usize::arbitrary(g) % 20) {
            let cell = Cell::arbitrary(g);
            // Skip collisions instead of retrying; sparser boards are fine.
            if !board.is_free(cell) {
                continue;
            }
            board
                .place(TileId(next_id), Face::arbitrary(g), cell)
                .unwrap();
            next_id += 1;
        }

        let mut selected = Tile::new(TileId(next_id), Face::arbitrary(g));
        selected.is_in_hand = true;
        PlaceTileInput { board, selected }
    }
}
