use std::ops::Neg;

use Heading::*;

/// Direction of travel of the snake's head
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Neg for Heading {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

impl Heading {
    // clockwise order starting from Up
    #[cfg(test)]
    pub fn iter() -> impl Iterator<Item = Self> {
        [Up, Right, Down, Left].iter().copied()
    }

    /// The 180° reverse of `self`
    pub fn opposite(self) -> Self {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Cell offset of one step in this direction, y grows downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_reverse_of(self, other: Self) -> bool {
        self == other.opposite()
    }
}

#[test]
fn test_opposite_is_involution() {
    for heading in Heading::iter() {
        assert_ne!(heading, -heading);
        assert_eq!(heading, -(-heading));
        assert!(heading.is_reverse_of(-heading));
    }
}

#[test]
fn test_opposite_deltas_cancel() {
    for heading in Heading::iter() {
        let (dx, dy) = heading.delta();
        let (ox, oy) = heading.opposite().delta();
        assert_eq!((dx + ox, dy + oy), (0, 0), "{:?}", heading);
    }
}
