//! Snap orchestration: the priority chain that decides where a dragged
//! rectangle lands.
//!
//! Rules are tried in a fixed order and the first one that moves the
//! rectangle wins:
//!
//! 1. [`SnapRule::ViewportBounds`] — clamp into, or flush against, the viewport edges.
//! 2. [`SnapRule::Siblings`] — align with the nearest sibling rectangle.
//! 3. [`SnapRule::ViewportCenter`] — align with the viewport's center line.
//!
//! # Example
//!
//! ```
//! use zensnap::{Axis, Edges, Node, Size, SnapConfig, SnapRule, Snapper};
//!
//! let mut dragged = Node::new(1u32, Edges::new(300.0, 420.0, 350.0, 370.0));
//! let siblings: [Node<u32>; 0] = [];
//!
//! let rule = Snapper::new(SnapConfig::new(10.0))
//!     .snap_node(&mut dragged, &siblings, Axis::X, &Size::new(800.0, 600.0));
//!
//! assert_eq!(rule, Some(SnapRule::ViewportCenter));
//! assert_eq!(dragged.center_x(), 400.0);
//! ```

use alloc::vec::Vec;
use core::fmt::Debug;

use log::{debug, trace};
use num_traits::Float;

use crate::align::{h_align, h_bounds, v_align, v_bounds};
use crate::node::{Axis, Node, Point, XFeature, YFeature};
use crate::search::{closest_node, remove_node};
use crate::source::{RectSource, ViewportSource, nodes_from_ids};

/// Sibling lines tried on the x axis, highest priority first.
const SIBLING_X: [XFeature; 3] = [XFeature::Left, XFeature::CenterX, XFeature::Right];

/// Sibling lines tried on the y axis, highest priority first.
const SIBLING_Y: [YFeature; 3] = [YFeature::Bottom, YFeature::CenterY, YFeature::Top];

/// Tolerance used by [`SnapConfig::default`].
pub const DEFAULT_TOLERANCE: f64 = 10.0;

/// Align `node` with the nearest candidate that is close enough.
///
/// Candidates are visited nearest first (see [`closest_node`]). Each one is
/// tried against its left, center, and right lines on [`Axis::X`] (bottom,
/// center, top on [`Axis::Y`]); a candidate that matches none of them is
/// dropped and the next nearest is tried. `node` moves at most once.
pub fn snap_to_nodes<A, B, T>(
    node: &mut Node<A, T>,
    candidates: &[Node<B, T>],
    axis: Axis,
    tolerance: T,
) -> bool
where
    B: PartialEq,
    T: Float,
{
    let mut pool: Vec<&Node<B, T>> = candidates.iter().collect();
    while let Some(closest) = closest_node(&*node, pool.iter().copied(), axis) {
        let aligned = match axis {
            Axis::X => SIBLING_X
                .iter()
                .any(|&key| v_align(node, closest, key, tolerance)),
            Axis::Y => SIBLING_Y
                .iter()
                .any(|&key| h_align(node, closest, key, tolerance)),
        };
        if aligned {
            return true;
        }
        pool = remove_node(&closest.id, pool);
        trace!("snap_to_nodes: nearest candidate rejected, {} left", pool.len());
    }
    false
}

/// Snap `node` against the viewport.
///
/// With `outer` set, the node is kept inside the viewport and pulled flush
/// to an edge within `tolerance` ([`h_bounds`] / [`v_bounds`]). Otherwise it
/// is aligned with the viewport's center line on `axis`.
pub fn snap_to_viewport<A, T, V>(
    node: &mut Node<A, T>,
    axis: Axis,
    tolerance: T,
    viewport: &V,
    outer: bool,
) -> bool
where
    T: Float,
    V: ViewportSource<T> + ?Sized,
{
    let bounds = viewport.viewport_size().bounds(());
    match (outer, axis) {
        (true, Axis::X) => h_bounds(node, &bounds, tolerance),
        (true, Axis::Y) => v_bounds(node, &bounds, tolerance),
        (false, Axis::X) => v_align(node, &bounds, XFeature::CenterX, tolerance),
        (false, Axis::Y) => h_align(node, &bounds, YFeature::CenterY, tolerance),
    }
}

/// One step of the snap priority chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapRule {
    /// Keep inside the viewport, flush to a nearby edge.
    ViewportBounds,
    /// Align with the nearest sibling rectangle.
    Siblings,
    /// Align with the viewport's center line.
    ViewportCenter,
}

impl SnapRule {
    /// Evaluation order, highest priority first.
    pub const PRIORITY: [Self; 3] = [Self::ViewportBounds, Self::Siblings, Self::ViewportCenter];

    fn apply<A, B, T, V>(
        self,
        node: &mut Node<A, T>,
        candidates: &[Node<B, T>],
        axis: Axis,
        tolerance: T,
        viewport: &V,
    ) -> bool
    where
        B: PartialEq,
        T: Float,
        V: ViewportSource<T> + ?Sized,
    {
        match self {
            Self::ViewportBounds => snap_to_viewport(node, axis, tolerance, viewport, true),
            Self::Siblings => snap_to_nodes(node, candidates, axis, tolerance),
            Self::ViewportCenter => snap_to_viewport(node, axis, tolerance, viewport, false),
        }
    }
}

/// Snapping configuration.
///
/// Each rule of the chain can be switched off; the remaining rules keep
/// their relative order.
///
/// ```
/// use zensnap::{SnapConfig, SnapRule};
///
/// let config = SnapConfig::new(6.0).viewport_center(false);
/// assert!(config.is_enabled(SnapRule::Siblings));
/// assert!(!config.is_enabled(SnapRule::ViewportCenter));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapConfig<T = f64> {
    /// Maximum distance, in coordinate units, that still snaps.
    pub tolerance: T,
    #[cfg_attr(feature = "serde", serde(default = "enabled"))]
    pub viewport_bounds: bool,
    #[cfg_attr(feature = "serde", serde(default = "enabled"))]
    pub siblings: bool,
    #[cfg_attr(feature = "serde", serde(default = "enabled"))]
    pub viewport_center: bool,
}

#[cfg(feature = "serde")]
fn enabled() -> bool {
    true
}

impl<T> SnapConfig<T> {
    /// All rules enabled with the given tolerance.
    pub const fn new(tolerance: T) -> Self {
        Self {
            tolerance,
            viewport_bounds: true,
            siblings: true,
            viewport_center: true,
        }
    }

    /// Set the tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable [`SnapRule::ViewportBounds`].
    pub fn viewport_bounds(mut self, on: bool) -> Self {
        self.viewport_bounds = on;
        self
    }

    /// Enable or disable [`SnapRule::Siblings`].
    pub fn siblings(mut self, on: bool) -> Self {
        self.siblings = on;
        self
    }

    /// Enable or disable [`SnapRule::ViewportCenter`].
    pub fn viewport_center(mut self, on: bool) -> Self {
        self.viewport_center = on;
        self
    }

    pub fn is_enabled(&self, rule: SnapRule) -> bool {
        match rule {
            SnapRule::ViewportBounds => self.viewport_bounds,
            SnapRule::Siblings => self.siblings,
            SnapRule::ViewportCenter => self.viewport_center,
        }
    }
}

impl Default for SnapConfig<f64> {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

/// Result of [`Snapper::snap`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snapped<T = f64> {
    /// Top-left corner after snapping (unchanged if no rule fired).
    pub point: Point<T>,
    /// The rule that moved the rectangle, if any.
    pub rule: Option<SnapRule>,
}

/// Result of [`Snapper::snap_xy`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnappedXy<T = f64> {
    pub point: Point<T>,
    pub x_rule: Option<SnapRule>,
    pub y_rule: Option<SnapRule>,
}

/// Runs the snap priority chain with a fixed configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snapper<T = f64> {
    config: SnapConfig<T>,
}

impl<T: Float> Snapper<T> {
    pub fn new(config: SnapConfig<T>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SnapConfig<T> {
        &self.config
    }

    /// Run the enabled rules on `node` in priority order, stopping at the
    /// first that moves it.
    ///
    /// `candidates` should not contain `node` itself; a rectangle always
    /// aligns with its own copy.
    pub fn snap_node<A, B, V>(
        &self,
        node: &mut Node<A, T>,
        candidates: &[Node<B, T>],
        axis: Axis,
        viewport: &V,
    ) -> Option<SnapRule>
    where
        B: PartialEq,
        V: ViewportSource<T> + ?Sized,
    {
        let tolerance = self.config.tolerance;
        SnapRule::PRIORITY
            .into_iter()
            .filter(|&rule| self.config.is_enabled(rule))
            .find(|&rule| rule.apply(node, candidates, axis, tolerance, viewport))
    }

    /// Resolve `id` and `ids` through `rects`, then snap `id` along `axis`
    /// against the others.
    ///
    /// `id` is filtered out of `ids` before candidates are built. Lookup
    /// failures from `rects` are returned unchanged.
    pub fn snap<Id, S, V>(
        &self,
        id: &Id,
        ids: &[Id],
        axis: Axis,
        rects: &S,
        viewport: &V,
    ) -> Result<Snapped<T>, S::Error>
    where
        Id: PartialEq + Clone + Debug,
        S: RectSource<Id, T> + ?Sized,
        V: ViewportSource<T> + ?Sized,
    {
        let (mut node, candidates) = self.resolve(id, ids, rects)?;
        let rule = self.snap_node(&mut node, &candidates, axis, viewport);
        debug!("snap: {id:?} on {axis:?} -> {rule:?}");
        Ok(Snapped {
            point: node.top_left(),
            rule,
        })
    }

    /// Snap along x, then along y, moving the same rectangle.
    ///
    /// The y pass sees the rectangle where the x pass left it.
    pub fn snap_xy<Id, S, V>(
        &self,
        id: &Id,
        ids: &[Id],
        rects: &S,
        viewport: &V,
    ) -> Result<SnappedXy<T>, S::Error>
    where
        Id: PartialEq + Clone + Debug,
        S: RectSource<Id, T> + ?Sized,
        V: ViewportSource<T> + ?Sized,
    {
        let (mut node, candidates) = self.resolve(id, ids, rects)?;
        let x_rule = self.snap_node(&mut node, &candidates, Axis::X, viewport);
        let y_rule = self.snap_node(&mut node, &candidates, Axis::Y, viewport);
        debug!("snap_xy: {id:?} -> x {x_rule:?}, y {y_rule:?}");
        Ok(SnappedXy {
            point: node.top_left(),
            x_rule,
            y_rule,
        })
    }

    #[allow(clippy::type_complexity)]
    fn resolve<Id, S>(
        &self,
        id: &Id,
        ids: &[Id],
        rects: &S,
    ) -> Result<(Node<Id, T>, Vec<Node<Id, T>>), S::Error>
    where
        Id: PartialEq + Clone,
        S: RectSource<Id, T> + ?Sized,
    {
        let node = Node::from_source(id.clone(), rects)?;
        let others: Vec<Id> = ids.iter().filter(|other| *other != id).cloned().collect();
        let candidates = nodes_from_ids(&others, rects)?;
        Ok((node, candidates))
    }
}

/// Snap `id` along `axis` with every rule enabled and return its new
/// top-left corner.
///
/// Shorthand for [`Snapper::snap`] with [`SnapConfig::new`]`(tolerance)`.
pub fn snap<Id, T, S, V>(
    id: &Id,
    ids: &[Id],
    axis: Axis,
    tolerance: T,
    rects: &S,
    viewport: &V,
) -> Result<Point<T>, S::Error>
where
    Id: PartialEq + Clone + Debug,
    T: Float,
    S: RectSource<Id, T> + ?Sized,
    V: ViewportSource<T> + ?Sized,
{
    Snapper::new(SnapConfig::new(tolerance))
        .snap(id, ids, axis, rects, viewport)
        .map(|snapped| snapped.point)
}
