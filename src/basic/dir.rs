use std::ops::Neg;

use ggez::input::keyboard::KeyCode;

use crate::basic::GridPoint;
use Dir::*;

// y grows downwards, like the screen
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

impl Dir {
    #[cfg(test)]
    pub fn iter() -> impl Iterator<Item = Self> {
        [Up, Down, Left, Right].iter().copied()
    }

    /// Only the four arrow keys map to a direction
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up => Some(Up),
            KeyCode::Down => Some(Down),
            KeyCode::Left => Some(Left),
            KeyCode::Right => Some(Right),
            _ => None,
        }
    }

    /// Unit step on the grid
    pub fn offset(self) -> GridPoint {
        match self {
            Up => GridPoint { x: 0, y: -1 },
            Down => GridPoint { x: 0, y: 1 },
            Left => GridPoint { x: -1, y: 0 },
            Right => GridPoint { x: 1, y: 0 },
        }
    }

    pub fn is_reverse_of(self, other: Self) -> bool {
        self == -other
    }
}

#[test]
fn test_reverse() {
    for (dir, reverse) in [(Up, Down), (Down, Up), (Left, Right), (Right, Left)] {
        assert_eq!(-dir, reverse);
        assert!(dir.is_reverse_of(reverse));
        assert!(!dir.is_reverse_of(dir), "{:?}", dir);
    }
}

#[test]
fn test_offsets_are_unit_and_opposite() {
    for dir in Dir::iter() {
        let offset = dir.offset();
        assert_eq!(offset.x.abs() + offset.y.abs(), 1, "{:?}", dir);
        assert_eq!((-dir).offset(), -offset);
    }
}

#[test]
fn test_from_key() {
    assert_eq!(Dir::from_key(KeyCode::Up), Some(Up));
    assert_eq!(Dir::from_key(KeyCode::Right), Some(Right));
    assert_eq!(Dir::from_key(KeyCode::Space), None);
    assert_eq!(Dir::from_key(KeyCode::W), None);
}
