use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four tile colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    #[serde(rename = "B")]
    Blue,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "P")]
    Purple,
    #[serde(rename = "O")]
    Orange,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Blue, Color::Red, Color::Purple, Color::Orange];

    /// The single-letter form used in tile codes.
    pub fn letter(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Purple => 'P',
            Color::Orange => 'O',
        }
    }
}

/// A tile rank, always within `1..=13`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MIN: Rank = Rank(1);
    pub const MAX: Rank = Rank(13);

    pub fn new(value: u8) -> Option<Rank> {
        (1..=13).contains(&value).then_some(Rank(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The next-higher rank, or `None` at the top of the run.
    pub fn succ(self) -> Option<Rank> {
        Rank::new(self.0 + 1)
    }

    /// The next-lower rank, or `None` at the bottom of the run.
    pub fn pred(self) -> Option<Rank> {
        Rank::new(self.0 - 1)
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {} is outside 1..=13", value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

/// The immutable identity of a tile: a colored rank, or a wildcard.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Colored { color: Color, rank: Rank },
    Wildcard,
}

impl Face {
    pub fn is_wildcard(self) -> bool {
        matches!(self, Face::Wildcard)
    }

    /// The 4-character code used as the comparison key for adjacency,
    /// e.g. `B:07` or `X:00` for wildcards.
    pub fn code(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Colored { color, rank } => write!(f, "{}:{:02}", color.letter(), rank.get()),
            Face::Wildcard => write!(f, "X:00"),
        }
    }
}

/// The error type for the [`FromStr`] instance of [`Face`].
#[derive(Clone, Copy, Debug)]
pub enum FaceFromStrErr {
    WrongLength,
    MissingSeparator,
    InvalidColor,
    InvalidRank,
}

impl FromStr for Face {
    type Err = FaceFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let color_char = chars.next().ok_or(FaceFromStrErr::WrongLength)?;
        if chars.next() != Some(':') {
            return Err(FaceFromStrErr::MissingSeparator);
        }
        let digits: String = chars.collect();
        if digits.len() != 2 {
            return Err(FaceFromStrErr::WrongLength);
        }
        let value: u8 = digits.parse().map_err(|_| FaceFromStrErr::InvalidRank)?;
        if color_char == 'X' {
            return if value == 0 {
                Ok(Face::Wildcard)
            } else {
                Err(FaceFromStrErr::InvalidRank)
            };
        }
        let color = match color_char {
            'B' => Color::Blue,
            'R' => Color::Red,
            'P' => Color::Purple,
            'O' => Color::Orange,
            _ => return Err(FaceFromStrErr::InvalidColor),
        };
        let rank = Rank::new(value).ok_or(FaceFromStrErr::InvalidRank)?;
        Ok(Face::Colored { color, rank })
    }
}

/// Shorthand for creating tile faces from a code string.
///
/// The format is the same `<color-letter>:<2-digit-rank>` code used for
/// adjacency comparison, with `X:00` denoting a wildcard.
///
/// This macro is just calling the [`FromStr`] instance of [`Face`].
/// ```
/// # use rummi::{tile, Color, Face, Rank};
/// assert_eq!(
///     tile!("B:07"),
///     Face::Colored { color: Color::Blue, rank: Rank::new(7).unwrap() }
/// );
/// ```
#[macro_export]
macro_rules! tile {
    ($code:literal) => {
        <$crate::Face as std::str::FromStr>::from_str($code)
            .expect("Invalid tile code given to tile! macro")
    };
}
// The import is for using the macro in other modules of this crate.
#[allow(unused_imports)]
pub(crate) use tile;

/// Index of a tile in the session's tile table.
///
/// Ids are assigned sequentially at deck construction and never change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl TileId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A physical tile: immutable identity plus mutable placement state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub face: Face,
    pub is_selected: bool,
    /// True from dealing until the tile is first placed on a track.
    /// Tiles do not return to the hand.
    pub is_in_hand: bool,
    /// Reserved for the board validity scan; nothing sets this yet.
    pub is_invalid: bool,
}

impl Tile {
    pub fn new(id: TileId, face: Face) -> Self {
        Self {
            id,
            face,
            is_selected: false,
            is_in_hand: false,
            is_invalid: false,
        }
    }

    pub fn code(&self) -> String {
        self.face.code()
    }
}
