//! Rectangle value type and the small vocabulary around it.
//!
//! A [`Node`] is a rectangle with an identifier and two derived centers.
//! Edges only move through [`Node::h_translate`] and [`Node::v_translate`],
//! so the centers can never go stale.
//!
//! # Example
//!
//! ```
//! use zensnap::{Edges, Node};
//!
//! let mut node = Node::new("card", Edges::new(50.0, 582.0, 290.0, 142.0));
//! assert_eq!(node.center_x(), 362.0);
//! assert_eq!(node.center_y(), 170.0);
//!
//! node.h_translate(-10.0);
//! assert_eq!(node.left(), 132.0);
//! assert_eq!(node.center_x(), 352.0);
//! ```

use core::fmt;
use core::str::FromStr;

use num_traits::Float;

/// Whether `a` and `b` are within `tolerance` of each other (inclusive).
#[inline]
pub fn close_enough<T: Float>(a: T, b: T, tolerance: T) -> bool {
    (b - a).abs() <= tolerance
}

/// `floor((a + b) / 2)`.
#[inline]
fn midpoint<T: Float>(a: T, b: T) -> T {
    ((a + b) / (T::one() + T::one())).floor()
}

/// The four edges of a rectangle, as supplied by a host.
///
/// `top < bottom` and `left < right` are expected but not checked.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edges<T = f64> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T> Edges<T> {
    /// Create an edge set (CSS order: top, right, bottom, left).
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Width × height of a viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size<T = f64> {
    pub width: T,
    pub height: T,
}

impl<T: Float> Size<T> {
    /// Create a new size.
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    /// Rectangle covering this size with its top-left corner at the origin.
    pub fn bounds<Id>(&self, id: Id) -> Node<Id, T> {
        Node::new(
            id,
            Edges::new(T::zero(), self.width, self.height, T::zero()),
        )
    }
}

/// Top-left coordinates of a rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

/// Snapping direction.
///
/// Hosts usually pass this as a number: `0` for x, `1` for y.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Horizontal movement (x coordinates change).
    X,
    /// Vertical movement (y coordinates change).
    Y,
}

impl Axis {
    /// Numeric form: 0 for [`Axis::X`], 1 for [`Axis::Y`].
    pub const fn index(self) -> u8 {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

/// Numeric axis other than 0 or 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidAxis(pub u8);

impl fmt::Display for InvalidAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "axis must be 0 (x) or 1 (y), got {}", self.0)
    }
}

impl core::error::Error for InvalidAxis {}

impl TryFrom<u8> for Axis {
    type Error = InvalidAxis;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            other => Err(InvalidAxis(other)),
        }
    }
}

/// A horizontal feature of a rectangle: an x coordinate to align against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum XFeature {
    Left,
    CenterX,
    Right,
}

/// A vertical feature of a rectangle: a y coordinate to align against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum YFeature {
    Top,
    CenterY,
    Bottom,
}

/// Feature key string that names no rectangle feature on the requested axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownFeature;

impl fmt::Display for UnknownFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown rectangle feature")
    }
}

impl core::error::Error for UnknownFeature {}

impl FromStr for XFeature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "centerX" => Ok(Self::CenterX),
            "right" => Ok(Self::Right),
            _ => Err(UnknownFeature),
        }
    }
}

impl FromStr for YFeature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "centerY" => Ok(Self::CenterY),
            "bottom" => Ok(Self::Bottom),
            _ => Err(UnknownFeature),
        }
    }
}

/// A rectangle in the plane, identified by `id`.
///
/// Centers are `floor((left + right) / 2)` and `floor((top + bottom) / 2)`
/// and are recomputed on every translation.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<Id, T = f64> {
    pub id: Id,
    top: T,
    bottom: T,
    left: T,
    right: T,
    center_x: T,
    center_y: T,
}

impl<Id, T: Float> Node<Id, T> {
    /// Create a node from an explicit edge set.
    pub fn new(id: Id, edges: Edges<T>) -> Self {
        Self {
            id,
            top: edges.top,
            bottom: edges.bottom,
            left: edges.left,
            right: edges.right,
            center_x: midpoint(edges.left, edges.right),
            center_y: midpoint(edges.top, edges.bottom),
        }
    }

    pub fn top(&self) -> T {
        self.top
    }

    pub fn bottom(&self) -> T {
        self.bottom
    }

    pub fn left(&self) -> T {
        self.left
    }

    pub fn right(&self) -> T {
        self.right
    }

    pub fn center_x(&self) -> T {
        self.center_x
    }

    pub fn center_y(&self) -> T {
        self.center_y
    }

    /// Read a horizontal feature.
    pub fn x(&self, feature: XFeature) -> T {
        match feature {
            XFeature::Left => self.left,
            XFeature::CenterX => self.center_x,
            XFeature::Right => self.right,
        }
    }

    /// Read a vertical feature.
    pub fn y(&self, feature: YFeature) -> T {
        match feature {
            YFeature::Top => self.top,
            YFeature::CenterY => self.center_y,
            YFeature::Bottom => self.bottom,
        }
    }

    /// Current edges.
    pub fn edges(&self) -> Edges<T> {
        Edges::new(self.top, self.right, self.bottom, self.left)
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Point<T> {
        Point {
            x: self.left,
            y: self.top,
        }
    }

    /// Shift left and right by `offset`.
    pub fn h_translate(&mut self, offset: T) {
        self.left = self.left + offset;
        self.right = self.right + offset;
        self.center_x = midpoint(self.left, self.right);
    }

    /// Shift top and bottom by `offset`.
    pub fn v_translate(&mut self, offset: T) {
        self.top = self.top + offset;
        self.bottom = self.bottom + offset;
        self.center_y = midpoint(self.top, self.bottom);
    }
}
