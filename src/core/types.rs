//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for actors (players and mobs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Unique identifier for rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u32);

/// Unique identifier for items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Round counter (simulation time unit)
pub type Round = u64;

/// Compass and vertical directions used by exits
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    /// The direction an arrival is seen coming from
    pub fn inverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Attack styles an actor can prefer
///
/// Closed set: every consumer matches exhaustively, so adding a style is a
/// compile-time change everywhere it matters.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
pub enum AttackKind {
    #[default]
    #[strum(to_string = "melee")]
    Melee,
    #[strum(to_string = "ranged", serialize = "range")]
    Ranged,
    #[strum(to_string = "thrown", serialize = "throw")]
    Thrown,
}

impl AttackKind {
    /// Verb used in combat narration ("has throw attacked")
    pub fn verb(self) -> &'static str {
        match self {
            AttackKind::Melee => "melee",
            AttackKind::Ranged => "range",
            AttackKind::Thrown => "throw",
        }
    }
}

/// Position inside a room (terrain grids live outside the core)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance (diagonal steps count as one)
    pub fn distance(&self, other: &Self) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_direction_inverse_is_involution() {
        for direction in Direction::iter() {
            assert_eq!(direction.inverse().inverse(), direction);
            assert_ne!(direction.inverse(), direction);
        }
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::North.to_string(), "NORTH");
        assert_eq!(Direction::Down.to_string(), "DOWN");
    }

    #[test]
    fn test_attack_kind_aliases() {
        assert_eq!(AttackKind::from_str("melee"), Ok(AttackKind::Melee));
        assert_eq!(AttackKind::from_str("range"), Ok(AttackKind::Ranged));
        assert_eq!(AttackKind::from_str("ranged"), Ok(AttackKind::Ranged));
        assert_eq!(AttackKind::from_str("throw"), Ok(AttackKind::Thrown));
        assert_eq!(AttackKind::from_str("thrown"), Ok(AttackKind::Thrown));
        assert!(AttackKind::from_str("magic").is_err());
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0, 0);
        assert_eq!(a.distance(&Position::new(2, 1)), 2);
        assert_eq!(a.distance(&Position::new(-3, 3)), 3);
        assert_eq!(a.distance(&a), 0);
    }
}
