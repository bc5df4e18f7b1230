use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

/// Semantic label of one grid cell. Every cell holds exactly one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Nothing,
    Wall,
    Floor,
    Avatar,
    Sand,
}

impl TileKind {
    /// Stable per-kind code, used by snapshot hashing and renderers.
    pub fn code(self) -> u8 {
        match self {
            Self::Nothing => 0,
            Self::Wall => 1,
            Self::Floor => 2,
            Self::Avatar => 3,
            Self::Sand => 4,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Nothing => "nothing",
            Self::Wall => "wall",
            Self::Floor => "floor",
            Self::Avatar => "you",
            Self::Sand => "sand",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldError {
    InvalidArgument(String),
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
        }
    }
}

impl Error for WorldError {}
