use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// Direction in which every tile on the grid slides.
///
/// The declaration order is the order in which the advisor probes
/// directions, so it also decides ties (see [`TieBreak`](crate::advisor::TieBreak)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions in evaluation order: left, right, up, down.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns `true` for moves that slide along rows.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Returns `true` when tiles travel towards the high index end of a line.
    ///
    /// Right and down visit cells in decreasing index order.
    #[inline]
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Returns the lowercase name of the direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Returns an arrow glyph for display.
    pub fn arrow(self) -> char {
        match self {
            Direction::Left => '←',
            Direction::Right => '→',
            Direction::Up => '↑',
            Direction::Down => '↓',
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| GameError::InvalidDirection(value.to_string()))
    }
}

impl FromStr for Direction {
    type Err = GameError;

    /// Parses a direction name or one of the `w`/`a`/`s`/`d` key aliases.
    /// Case is ignored and surrounding whitespace is trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "a" => Ok(Direction::Left),
            "right" | "d" => Ok(Direction::Right),
            "up" | "w" => Ok(Direction::Up),
            "down" | "s" => Ok(Direction::Down),
            _ => Err(GameError::InvalidDirection(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("RIGHT".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(" Up ".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
    }

    #[test]
    fn test_parse_key_aliases() {
        assert_eq!("a".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("d".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("w".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("s".parse::<Direction>(), Ok(Direction::Down));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "diagonal".parse::<Direction>(),
            Err(GameError::InvalidDirection("diagonal".to_string()))
        );
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_try_from_index() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::try_from(i as u8), Ok(*dir));
        }
        assert!(Direction::try_from(4).is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
    }

    #[test]
    fn test_axis_helpers() {
        assert!(Direction::Left.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(Direction::Right.is_reversed());
        assert!(Direction::Down.is_reversed());
        assert!(!Direction::Left.is_reversed());
        assert!(!Direction::Up.is_reversed());
    }
}
