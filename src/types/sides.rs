//! Domain faces and per-face values with named fields.
//!
//! Provides strongly-typed structures for per-face boundary specifications,
//! eliminating the need to remember array index conventions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Horizontal direction of a grid axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// x (i index)
    X,
    /// y (j index)
    Y,
}

impl Direction {
    /// Axis index into `[i, j, k]` triples.
    #[inline]
    pub const fn axis(self) -> usize {
        match self {
            Direction::X => 0,
            Direction::Y => 1,
        }
    }

    /// The other horizontal direction.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Direction::X => Direction::Y,
            Direction::Y => Direction::X,
        }
    }
}

/// One of the four horizontal faces of the computational domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// y = y_min
    South,
    /// x = x_max
    East,
    /// y = y_max
    North,
    /// x = x_min
    West,
}

impl Face {
    /// All faces in storage order: south, east, north, west.
    pub const ALL: [Face; 4] = [Face::South, Face::East, Face::North, Face::West];

    /// Direction normal to this face.
    #[inline]
    pub const fn normal_direction(self) -> Direction {
        match self {
            Face::West | Face::East => Direction::X,
            Face::South | Face::North => Direction::Y,
        }
    }

    /// True for the low side of its direction (west, south).
    #[inline]
    pub const fn is_low(self) -> bool {
        matches!(self, Face::West | Face::South)
    }

    /// Sign of the outward normal along [`Face::normal_direction`]: -1 on the
    /// low side, +1 on the high side.
    #[inline]
    pub const fn outward_sign(self) -> f64 {
        if self.is_low() { -1.0 } else { 1.0 }
    }

    /// Index into [`SideBoundaries`] storage order.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Face::South => 0,
            Face::East => 1,
            Face::North => 2,
            Face::West => 3,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::South => "south",
            Face::East => "east",
            Face::North => "north",
            Face::West => "west",
        };
        f.write_str(name)
    }
}

/// Per-face specification with named fields.
///
/// Eliminates array index confusion like `[south, east, north, west]`
/// vs `[west, east, south, north]` by using explicit field names.
///
/// # Example
///
/// ```
/// use ocean_bc::types::{Face, SideBoundaries};
/// use ocean_bc::boundary::PhysicalBc;
///
/// let bcs = SideBoundaries::new(
///     PhysicalBc::NoSlipWall,  // south
///     PhysicalBc::OrlanskiRad, // east
///     PhysicalBc::NoSlipWall,  // north
///     PhysicalBc::Clamped,     // west
/// );
///
/// assert_eq!(bcs.south, PhysicalBc::NoSlipWall);
/// assert_eq!(*bcs.face(Face::East), PhysicalBc::OrlanskiRad);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBoundaries<T> {
    /// South face (y = y_min)
    pub south: T,
    /// East face (x = x_max)
    pub east: T,
    /// North face (y = y_max)
    pub north: T,
    /// West face (x = x_min)
    pub west: T,
}

impl<T> SideBoundaries<T> {
    /// Create new side boundaries with explicit named values.
    ///
    /// Order: south, east, north, west (counterclockwise from bottom)
    pub fn new(south: T, east: T, north: T, west: T) -> Self {
        Self {
            south,
            east,
            north,
            west,
        }
    }

    /// Create with the same value on all sides.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            south: value.clone(),
            east: value.clone(),
            north: value.clone(),
            west: value,
        }
    }

    /// Map a function over all sides.
    pub fn map<U, F>(self, mut f: F) -> SideBoundaries<U>
    where
        F: FnMut(T) -> U,
    {
        SideBoundaries {
            south: f(self.south),
            east: f(self.east),
            north: f(self.north),
            west: f(self.west),
        }
    }

    /// Value for a face.
    #[inline]
    pub fn face(&self, face: Face) -> &T {
        match face {
            Face::South => &self.south,
            Face::East => &self.east,
            Face::North => &self.north,
            Face::West => &self.west,
        }
    }

    /// Mutable value for a face.
    #[inline]
    pub fn face_mut(&mut self, face: Face) -> &mut T {
        match face {
            Face::South => &mut self.south,
            Face::East => &mut self.east,
            Face::North => &mut self.north,
            Face::West => &mut self.west,
        }
    }

    /// Convert to array [south, east, north, west].
    pub fn to_array(self) -> [T; 4] {
        [self.south, self.east, self.north, self.west]
    }

    /// Create from array [south, east, north, west].
    pub fn from_array([south, east, north, west]: [T; 4]) -> Self {
        Self {
            south,
            east,
            north,
            west,
        }
    }

    /// Iterate over `(face, value)` in order: south, east, north, west.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().map(move |face| (face, self.face(face)))
    }
}

impl<T: Default> Default for SideBoundaries<T> {
    fn default() -> Self {
        Self {
            south: T::default(),
            east: T::default(),
            north: T::default(),
            west: T::default(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for SideBoundaries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S:{} E:{} N:{} W:{}",
            self.south, self.east, self.north, self.west
        )
    }
}

impl<T> From<[T; 4]> for SideBoundaries<T> {
    fn from(arr: [T; 4]) -> Self {
        Self::from_array(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let sides = SideBoundaries::new(1, 2, 3, 4);
        assert_eq!(sides.south, 1);
        assert_eq!(sides.east, 2);
        assert_eq!(sides.north, 3);
        assert_eq!(sides.west, 4);
    }

    #[test]
    fn test_face_access_matches_index() {
        let mut sides = SideBoundaries::new(1, 2, 3, 4);
        for face in Face::ALL {
            assert_eq!(*sides.face(face), sides.to_array()[face.index()]);
        }
        *sides.face_mut(Face::West) = 40;
        assert_eq!(sides.west, 40);
    }

    #[test]
    fn test_map() {
        let sides = SideBoundaries::new(1, 2, 3, 4);
        let doubled = sides.map(|x| x * 2);
        assert_eq!(doubled.to_array(), [2, 4, 6, 8]);
    }

    #[test]
    fn test_iter_order() {
        let sides = SideBoundaries::uniform(0);
        let faces: Vec<_> = sides.iter().map(|(f, _)| f).collect();
        assert_eq!(faces, Face::ALL.to_vec());
    }

    #[test]
    fn test_face_geometry() {
        assert_eq!(Face::West.normal_direction(), Direction::X);
        assert_eq!(Face::North.normal_direction(), Direction::Y);
        assert!(Face::South.is_low());
        assert!(!Face::East.is_low());
        assert_eq!(Face::West.outward_sign(), -1.0);
        assert_eq!(Face::North.outward_sign(), 1.0);
        assert_eq!(Direction::X.other(), Direction::Y);
    }

    #[test]
    fn test_face_serde_names() {
        let json = serde_json::to_string(&Face::West).unwrap();
        assert_eq!(json, "\"west\"");
        let back: Face = serde_json::from_str("\"north\"").unwrap();
        assert_eq!(back, Face::North);
    }
}
