//! Lattice point, displacement and extent types
//!
//! The volume is addressed as `(column, row, frame)`. Three distinct types
//! keep the roles apart:
//!
//! - [`Point3`] - a lattice point (a pixel in a specific frame)
//! - [`Offset3`] - a displacement or direction between lattice points
//! - [`Extent3`] - a per-axis size, used for the volume bound and for
//!   sampling radii

use std::ops::{Add, Neg, Sub};

/// Integer lattice point `(column, row, frame)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point3 {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
    /// Frame index
    pub z: i32,
}

impl Point3 {
    /// Create a new point.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Coordinates as `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Build a point from `[x, y, z]`.
    #[inline]
    pub const fn from_array(c: [i32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Move the point by `offset`.
    #[inline]
    pub fn offset(self, offset: Offset3) -> Self {
        self + offset
    }

    /// Exact per-axis difference `other - self`.
    ///
    /// Unlike `other - self`, this never saturates, so it is safe for
    /// points anywhere in the `i32` lattice.
    #[inline]
    pub fn delta_to(self, other: Point3) -> [i64; 3] {
        let (a, b) = (self.to_array(), other.to_array());
        [0, 1, 2].map(|i| b[i] as i64 - a[i] as i64)
    }

    /// Whether `other` is this point or one of its 26 lattice neighbours.
    #[inline]
    pub fn is_continuous_with(self, other: Point3) -> bool {
        self.x.abs_diff(other.x) < 2 && self.y.abs_diff(other.y) < 2 && self.z.abs_diff(other.z) < 2
    }
}

/// Saturating at the `i32` limits.
impl Add<Offset3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Offset3) -> Point3 {
        Point3::new(
            self.x.saturating_add(rhs.dx),
            self.y.saturating_add(rhs.dy),
            self.z.saturating_add(rhs.dz),
        )
    }
}

/// Saturating at the `i32` limits; see [`Point3::delta_to`] for the exact
/// difference.
impl Sub for Point3 {
    type Output = Offset3;

    fn sub(self, rhs: Point3) -> Offset3 {
        Offset3::new(
            self.x.saturating_sub(rhs.x),
            self.y.saturating_sub(rhs.y),
            self.z.saturating_sub(rhs.z),
        )
    }
}

/// Integer displacement between lattice points, also used as a line
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset3 {
    pub dx: i32,
    pub dy: i32,
    pub dz: i32,
}

impl Offset3 {
    /// Create a new offset.
    pub const fn new(dx: i32, dy: i32, dz: i32) -> Self {
        Self { dx, dy, dz }
    }

    /// Components as `[dx, dy, dz]`.
    #[inline]
    pub const fn to_array(self) -> [i32; 3] {
        [self.dx, self.dy, self.dz]
    }

    /// True if every component is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0 && self.dz == 0
    }

    /// Per-axis absolute values, exact even for `i32::MIN`.
    #[inline]
    pub fn magnitudes(self) -> [i64; 3] {
        self.to_array().map(|d| (d as i64).abs())
    }

    /// Per-axis unit increments: `1` for a positive component, `-1`
    /// otherwise (zero components never advance, so their sign is moot).
    #[inline]
    pub fn unit_steps(self) -> [i32; 3] {
        self.to_array().map(|d| if d > 0 { 1 } else { -1 })
    }
}

impl Neg for Offset3 {
    type Output = Offset3;

    fn neg(self) -> Offset3 {
        Offset3::new(
            self.dx.saturating_neg(),
            self.dy.saturating_neg(),
            self.dz.saturating_neg(),
        )
    }
}

/// Per-axis extent.
///
/// As a volume bound every component is strictly positive and valid
/// coordinates satisfy `0 <= coord < extent`. As a sampling radius a zero
/// component collapses that axis onto the center coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent3 {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Extent3 {
    /// Create a new extent.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Components as `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [u32; 3] {
        [self.x, self.y, self.z]
    }

    /// True if any component is zero (no addressable lattice point).
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.x == 0 || self.y == 0 || self.z == 0
    }

    /// Whether `point` lies inside `[0, extent)` on every axis.
    #[inline]
    pub fn contains(self, point: Point3) -> bool {
        point
            .to_array()
            .into_iter()
            .zip(self.to_array())
            .all(|(c, b)| c >= 0 && (c as i64) < b as i64)
    }
}
