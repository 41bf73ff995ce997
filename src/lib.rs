//! Snap-alignment for rectangles dragged around a 2D plane.
//!
//! Pure geometry — callers supply rectangle edges and a viewport size, and
//! get back where the dragged rectangle should land. `no_std` compatible
//! (needs `alloc` for candidate lists).
//!
//! # Modules
//!
//! - [`node`] — Rectangle value type, axes, feature keys, tolerance predicate
//! - [`align`] — Pairwise alignment and boundary clamping on one axis
//! - [`search`] — Nearest-neighbor selection over candidate rectangles
//! - [`source`] — Injected rectangle and viewport providers
//! - [`snap`] — Priority chain: viewport bounds → siblings → viewport center
//!
//! # Example
//!
//! ```
//! use zensnap::{Axis, Edges, Size, Snapper, SnapConfig, SnapRule};
//! use std::collections::BTreeMap;
//!
//! let mut rects = BTreeMap::new();
//! rects.insert("dragged", Edges::new(150.0, 330.0, 200.0, 280.0));
//! rects.insert("anchor", Edges::new(90.0, 300.0, 140.0, 250.0));
//!
//! let viewport = Size::new(800.0, 600.0);
//! let snapped = Snapper::new(SnapConfig::new(10.0))
//!     .snap(&"dragged", &["anchor"], Axis::X, &rects, &viewport)
//!     .unwrap();
//!
//! // The dragged rectangle's left edge landed on the anchor's center.
//! assert_eq!(snapped.point.x, 275.0);
//! assert_eq!(snapped.rule, Some(SnapRule::Siblings));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod align;
pub mod node;
pub mod search;
pub mod snap;
pub mod source;

pub use align::{h_align, h_bounds, v_align, v_bounds};
pub use node::{
    Axis, Edges, InvalidAxis, Node, Point, Size, UnknownFeature, XFeature, YFeature, close_enough,
};
pub use search::{closest_node, remove_node};
pub use snap::{
    DEFAULT_TOLERANCE, SnapConfig, SnapRule, Snapped, SnappedXy, Snapper, snap, snap_to_nodes,
    snap_to_viewport,
};
pub use source::{RectSource, UnknownId, ViewportSource, nodes_from_ids};
