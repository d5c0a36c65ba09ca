//! Strongly-typed index types.
//!
//! Index newtypes prevent mixing up a field component with a refinement
//! level; [`IntVect`] is the signed grid coordinate used for cells that may
//! lie in the ghost margin.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }
    };
}

define_index!(
    /// Component index within a multi-component field.
    ///
    /// # Example
    ///
    /// ```
    /// use ocean_bc::types::ComponentIndex;
    ///
    /// let salt = ComponentIndex::new(1);
    /// assert_eq!(salt.get(), 1);
    /// ```
    ComponentIndex,
    "C"
);

define_index!(
    /// AMR refinement level.
    ///
    /// # Example
    ///
    /// ```
    /// use ocean_bc::types::LevelIndex;
    ///
    /// let level = LevelIndex::new(2);
    /// assert_eq!(level.to_string(), "L2");
    /// ```
    LevelIndex,
    "L"
);

/// Signed integer grid coordinate `(i, j, k)`.
///
/// Coordinates are signed so that ghost cells west/south of the domain
/// origin have negative indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntVect {
    /// x index
    pub i: i32,
    /// y index
    pub j: i32,
    /// z (vertical) index
    pub k: i32,
}

impl IntVect {
    /// Create a coordinate.
    #[inline]
    pub const fn new(i: i32, j: i32, k: i32) -> Self {
        Self { i, j, k }
    }

    /// The same value on all three axes.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self { i: v, j: v, k: v }
    }

    /// Return a copy with one axis replaced.
    #[inline]
    pub fn with_axis(mut self, axis: usize, value: i32) -> Self {
        self[axis] = value;
        self
    }

    /// Return a copy shifted by `delta` along one axis.
    #[inline]
    pub fn shifted(mut self, axis: usize, delta: i32) -> Self {
        self[axis] += delta;
        self
    }
}

impl Index<usize> for IntVect {
    type Output = i32;

    #[inline]
    fn index(&self, axis: usize) -> &i32 {
        match axis {
            0 => &self.i,
            1 => &self.j,
            2 => &self.k,
            _ => panic!("IntVect axis {axis} out of range"),
        }
    }
}

impl IndexMut<usize> for IntVect {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut i32 {
        match axis {
            0 => &mut self.i,
            1 => &mut self.j,
            2 => &mut self.k,
            _ => panic!("IntVect axis {axis} out of range"),
        }
    }
}

impl Add for IntVect {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
    }
}

impl Sub for IntVect {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
    }
}

impl fmt::Display for IntVect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.i, self.j, self.k)
    }
}

impl From<(i32, i32, i32)> for IntVect {
    #[inline]
    fn from((i, j, k): (i32, i32, i32)) -> Self {
        Self::new(i, j, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_index() {
        let idx = LevelIndex::new(2);
        assert_eq!(idx.get(), 2);
        assert_eq!(usize::from(idx), 2);
        assert_eq!(LevelIndex::ZERO.get(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ComponentIndex::new(4)), "C4");
        assert_eq!(format!("{}", LevelIndex::new(1)), "L1");
        assert_eq!(format!("{}", IntVect::new(-1, 2, 0)), "(-1,2,0)");
    }

    #[test]
    fn test_intvect_axis_access() {
        let mut iv = IntVect::new(1, 2, 3);
        assert_eq!(iv[0], 1);
        assert_eq!(iv[1], 2);
        assert_eq!(iv[2], 3);
        iv[1] = -4;
        assert_eq!(iv.j, -4);
    }

    #[test]
    fn test_intvect_helpers() {
        let iv = IntVect::new(0, 5, 1);
        assert_eq!(iv.with_axis(0, -2), IntVect::new(-2, 5, 1));
        assert_eq!(iv.shifted(1, -1), IntVect::new(0, 4, 1));
        assert_eq!(iv + IntVect::splat(1), IntVect::new(1, 6, 2));
        assert_eq!(iv - IntVect::splat(1), IntVect::new(-1, 4, 0));
    }
}
