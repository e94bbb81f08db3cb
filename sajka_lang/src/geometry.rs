// Integer grid geometry: points and their bounding rectangles.
//
// A word is laid out on an unbounded 2D integer grid. `y` grows downward in
// the text form (row index), `x` grows rightward (column index). Syllables
// are generated around the origin, so coordinates are routinely negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A cell position on the phoneme grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours (west, east, north, south).
    pub fn neighbors(self) -> [Point; 4] {
        [
            Point::new(self.x - 1, self.y),
            Point::new(self.x + 1, self.y),
            Point::new(self.x, self.y - 1),
            Point::new(self.x, self.y + 1),
        ]
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The minimal axis-aligned rectangle enclosing a set of points.
/// Both bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingRange {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl BoundingRange {
    /// Smallest range containing every point, or `None` if there are none.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut range = BoundingRange {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in iter {
            range.min_x = range.min_x.min(p.x);
            range.max_x = range.max_x.max(p.x);
            range.min_y = range.min_y.min(p.y);
            range.max_y = range.max_y.max(p.y);
        }
        Some(range)
    }

    pub fn width(&self) -> u32 {
        (self.max_x - self.min_x + 1) as u32
    }

    pub fn height(&self) -> u32 {
        (self.max_y - self.min_y + 1) as u32
    }

    /// Top-left corner, `(min_x, min_y)`.
    pub fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    /// Every point in the range, row by row (top to bottom), each row left
    /// to right starting again at `min_x`.
    pub fn points(&self) -> Points {
        Points {
            range: *self,
            next: Some(self.min()),
        }
    }
}

impl IntoIterator for BoundingRange {
    type Item = Point;
    type IntoIter = Points;

    fn into_iter(self) -> Points {
        self.points()
    }
}

/// Row-major iterator over a `BoundingRange`. See `BoundingRange::points`.
#[derive(Clone, Debug)]
pub struct Points {
    range: BoundingRange,
    next: Option<Point>,
}

impl Iterator for Points {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next?;
        self.next = if current.x < self.range.max_x {
            Some(Point::new(current.x + 1, current.y))
        } else if current.y < self.range.max_y {
            Some(Point::new(self.range.min_x, current.y + 1))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            None => 0,
            Some(p) => {
                let width = self.range.width() as usize;
                let full_rows = (self.range.max_y - p.y) as usize;
                full_rows * width + (self.range.max_x - p.x + 1) as usize
            }
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Points {}
