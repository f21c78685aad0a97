use crate::{Board, Cell, Track, TRACK_COLS, TRACK_ROWS};

/// Renders both tracks as box-drawn grids with tile codes, for debug
/// output.
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::new();
    for track in Track::BOTH {
        result += &format!("Set {}\n    ╭", track);
        for _ in 0..TRACK_COLS {
            result += "─────";
        }
        result += "╮\n";
        for row in 0..TRACK_ROWS {
            result += &format!("{:>3} │", row);
            for col in 0..TRACK_COLS {
                let cell = Cell { track, row, col };
                match board.placements().iter().find(|p| p.cell == cell) {
                    Some(p) => result += &format!("{} ", p.face),
                    None => result += "  ·  ",
                }
            }
            result += "│\n";
        }
        result += "    ╰";
        for _ in 0..TRACK_COLS {
            result += "─────";
        }
        result += "╯\n";
    }
    result
}
