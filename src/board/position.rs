//! Grid coordinates and distance primitives.
//!
//! A `Position` is an immutable `(x, y)` pair on the mining grid. The home
//! edge (headquarters column) is `x = 0`. The sentinel `(-1, -1)` marks a
//! destroyed bot or an unknown location.

use std::fmt;

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Position reported for destroyed bots.
    pub const DEAD: Position = Position { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub const fn x(self) -> i32 {
        self.x
    }

    pub const fn y(self) -> i32 {
        self.y
    }

    /// Returns true for the `(-1, -1)` sentinel.
    pub fn is_dead(self) -> bool {
        self == Position::DEAD
    }

    /// The cell itself followed by its four orthogonal neighbours
    /// (west, north, east, south).
    ///
    /// This is both the movement neighbourhood used for random digging and
    /// the blast relation of a trap. Neighbours may lie off the grid.
    pub fn adjacency(self) -> [Position; 5] {
        let Position { x, y } = self;
        [
            Position::new(x, y),
            Position::new(x - 1, y),
            Position::new(x, y - 1),
            Position::new(x + 1, y),
            Position::new(x, y + 1),
        ]
    }

    /// The same row on the home edge.
    pub fn home(self) -> Position {
        Position::new(0, self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Euclidean distance from `from` to `to`.
///
/// With `home_bias` the destination's x-coordinate is added, so among
/// comparable candidates the one closer to the home edge wins.
pub fn distance(from: Position, to: Position, home_bias: bool) -> f64 {
    let dx = f64::from(to.x - from.x);
    let dy = f64::from(to.y - from.y);
    let d = (dx * dx + dy * dy).sqrt();
    if home_bias {
        d + f64::from(to.x)
    } else {
        d
    }
}
