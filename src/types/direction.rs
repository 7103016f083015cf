//! 8-way compass directions and per-direction frame sequences.

use std::fmt;
use std::str::FromStr;

use crate::error::{FramepackError, Result};
use crate::types::Frame;

/// One of the 8 compass directions used for character movement.
///
/// The variant order here is the canonical sheet row order: row 0 of an
/// 8-row directional sheet is always `South`, row 4 is always `North`.
/// Every match over this enum is exhaustive so adding a direction is a
/// compile-time-visible change everywhere it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
}

impl Direction {
    /// All directions in canonical sheet row order.
    pub const CANONICAL: [Direction; 8] = [
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
    ];

    /// The sheet row this direction occupies in an 8-row directional sheet.
    pub fn row_index(self) -> usize {
        match self {
            Direction::South => 0,
            Direction::SouthWest => 1,
            Direction::West => 2,
            Direction::NorthWest => 3,
            Direction::North => 4,
            Direction::NorthEast => 5,
            Direction::East => 6,
            Direction::SouthEast => 7,
        }
    }

    /// The compass label used in file names and layout metadata.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::South => "south",
            Direction::SouthWest => "south_west",
            Direction::West => "west",
            Direction::NorthWest => "north_west",
            Direction::North => "north",
            Direction::NorthEast => "north_east",
            Direction::East => "east",
            Direction::SouthEast => "south_east",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = FramepackError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "south" => Ok(Direction::South),
            "south_west" => Ok(Direction::SouthWest),
            "west" => Ok(Direction::West),
            "north_west" => Ok(Direction::NorthWest),
            "north" => Ok(Direction::North),
            "north_east" => Ok(Direction::NorthEast),
            "east" => Ok(Direction::East),
            "south_east" => Ok(Direction::SouthEast),
            _ => Err(FramepackError::Parse {
                message: format!("Unknown direction: {}", s),
                help: Some(
                    "Expected one of: south, south_west, west, north_west, north, north_east, east, south_east"
                        .to_string(),
                ),
            }),
        }
    }
}

/// Per-direction ordered frame sequences for an 8-way animation.
///
/// Insertion order within a direction is playback order. A direction with
/// no frames means "not yet authored" - it is incompleteness, not an error.
#[derive(Debug, Clone, Default)]
pub struct DirectionSet8 {
    sequences: [Vec<Frame>; 8],
}

impl DirectionSet8 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame to a direction's sequence.
    pub fn push(&mut self, direction: Direction, frame: Frame) {
        self.sequences[direction.row_index()].push(frame);
    }

    /// The frames authored for a direction, in playback order.
    pub fn frames(&self, direction: Direction) -> &[Frame] {
        &self.sequences[direction.row_index()]
    }

    /// Iterate directions with their sequences, in canonical row order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &[Frame])> {
        Direction::CANONICAL
            .iter()
            .map(|&d| (d, self.frames(d)))
    }

    /// Total frame count across all directions.
    pub fn frame_count(&self) -> usize {
        self.sequences.iter().map(Vec::len).sum()
    }

    /// True when no direction has any frames.
    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    /// Length of the longest direction sequence.
    pub fn max_len(&self) -> usize {
        self.sequences.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Dimensions of the first authored frame, in canonical order.
    ///
    /// `None` when the set is empty.
    pub fn frame_size(&self) -> Option<(u32, u32)> {
        self.iter()
            .flat_map(|(_, frames)| frames.first())
            .next()
            .map(|f| (f.width(), f.height()))
    }
}
