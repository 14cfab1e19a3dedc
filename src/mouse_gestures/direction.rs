use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of segments a gesture is built from.
pub const MAX_SEGMENTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    pub const CARDINALS: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::UpLeft => "up-left",
            Direction::UpRight => "up-right",
            Direction::DownLeft => "down-left",
            Direction::DownRight => "down-right",
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Horizontal and vertical parts of a diagonal; `None` for a cardinal.
    pub fn components(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::UpLeft => Some((Direction::Left, Direction::Up)),
            Direction::UpRight => Some((Direction::Right, Direction::Up)),
            Direction::DownLeft => Some((Direction::Left, Direction::Down)),
            Direction::DownRight => Some((Direction::Right, Direction::Down)),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Direction::ALL
            .into_iter()
            .find(|dir| dir.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError {
                kind: ParseErrorKind::UnknownDirection(trimmed.to_string()),
            })
    }
}

/// A recognised gesture: one direction, or two consecutive distinct ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Direction>", try_from = "Vec<Direction>")]
pub enum GestureDirection {
    Single(Direction),
    Composite(Direction, Direction),
}

impl GestureDirection {
    /// Build a gesture from the first two segment directions. Returns `None`
    /// for an empty list.
    pub fn from_segments(segments: &[Direction]) -> Option<Self> {
        match segments {
            [] => None,
            [only] => Some(GestureDirection::Single(*only)),
            [first, second, ..] => Some(GestureDirection::Composite(*first, *second)),
        }
    }

    pub fn segments(&self) -> Vec<Direction> {
        match *self {
            GestureDirection::Single(dir) => vec![dir],
            GestureDirection::Composite(first, second) => vec![first, second],
        }
    }

    pub fn segment_count(&self) -> usize {
        match self {
            GestureDirection::Single(_) => 1,
            GestureDirection::Composite(..) => 2,
        }
    }

}

impl From<Direction> for GestureDirection {
    fn from(value: Direction) -> Self {
        GestureDirection::Single(value)
    }
}

impl From<GestureDirection> for Vec<Direction> {
    fn from(value: GestureDirection) -> Self {
        value.segments()
    }
}

impl TryFrom<Vec<Direction>> for GestureDirection {
    type Error = ParseError;

    fn try_from(value: Vec<Direction>) -> Result<Self, Self::Error> {
        if value.len() > MAX_SEGMENTS {
            return Err(ParseError {
                kind: ParseErrorKind::TooManySegments(value.len()),
            });
        }
        GestureDirection::from_segments(&value).ok_or(ParseError {
            kind: ParseErrorKind::EmptyInput,
        })
    }
}

impl fmt::Display for GestureDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureDirection::Single(dir) => write!(f, "{dir}"),
            GestureDirection::Composite(first, second) => write!(f, "{first}-{second}"),
        }
    }
}

impl FromStr for GestureDirection {
    type Err = ParseError;

    /// A whole-string direction wins over a composite, so `"up-left"` is the
    /// diagonal and `"left-up"` the two-segment gesture.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError {
                kind: ParseErrorKind::EmptyInput,
            });
        }
        if let Ok(dir) = trimmed.parse::<Direction>() {
            return Ok(GestureDirection::Single(dir));
        }
        for (idx, _) in trimmed.match_indices('-') {
            let (head, tail) = (&trimmed[..idx], &trimmed[idx + 1..]);
            if let (Ok(first), Ok(second)) = (head.parse::<Direction>(), tail.parse::<Direction>()) {
                return Ok(GestureDirection::Composite(first, second));
            }
        }
        Err(ParseError {
            kind: ParseErrorKind::UnknownGesture(trimmed.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    EmptyInput,
    UnknownDirection(String),
    UnknownGesture(String),
    TooManySegments(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::EmptyInput => write!(f, "empty gesture"),
            ParseErrorKind::UnknownDirection(value) => write!(f, "unknown direction '{value}'"),
            ParseErrorKind::UnknownGesture(value) => write!(f, "unknown gesture '{value}'"),
            ParseErrorKind::TooManySegments(count) => {
                write!(f, "gesture has {count} segments, at most {MAX_SEGMENTS} allowed")
            }
        }
    }
}

impl std::error::Error for ParseError {}
