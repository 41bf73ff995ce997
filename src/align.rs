//! Single-axis alignment primitives.
//!
//! Every function here mutates its first argument only, and only when it
//! returns `true`. The reference rectangle is borrowed immutably, so a
//! rectangle can never be aligned against itself.
//!
//! Naming follows the line being matched rather than the direction of
//! travel: [`v_align`] lines up vertical lines (left, center, right) and so
//! moves the subject along x; [`h_align`] lines up horizontal lines and
//! moves along y.

use num_traits::Float;

use crate::node::{Node, XFeature, YFeature, close_enough};

/// Subject features tried by [`v_align`], highest priority first.
const X_ORDER: [XFeature; 3] = [XFeature::Left, XFeature::CenterX, XFeature::Right];

/// Subject features tried by [`h_align`], highest priority first.
const Y_ORDER: [YFeature; 3] = [YFeature::Bottom, YFeature::CenterY, YFeature::Top];

/// Move `subject` along x so that one of its left, center, or right lines
/// lands exactly on `reference`'s `key` line.
///
/// Subject lines are tried left → center → right; the first one within
/// `tolerance` of the target wins. Returns `false` and leaves `subject`
/// untouched when none is close enough.
pub fn v_align<A, B, T: Float>(
    subject: &mut Node<A, T>,
    reference: &Node<B, T>,
    key: XFeature,
    tolerance: T,
) -> bool {
    let target = reference.x(key);
    let Some(current) = X_ORDER
        .iter()
        .map(|&own| subject.x(own))
        .find(|&current| close_enough(current, target, tolerance))
    else {
        return false;
    };
    subject.h_translate(target - current);
    true
}

/// Move `subject` along y so that one of its bottom, center, or top lines
/// lands exactly on `reference`'s `key` line.
///
/// Subject lines are tried bottom → center → top; the first one within
/// `tolerance` wins.
pub fn h_align<A, B, T: Float>(
    subject: &mut Node<A, T>,
    reference: &Node<B, T>,
    key: YFeature,
    tolerance: T,
) -> bool {
    let target = reference.y(key);
    let Some(current) = Y_ORDER
        .iter()
        .map(|&own| subject.y(own))
        .find(|&current| close_enough(current, target, tolerance))
    else {
        return false;
    };
    subject.v_translate(target - current);
    true
}

/// Keep `node` inside `bounds` horizontally, snapping flush to an edge.
///
/// A node whose left edge is past (or within `tolerance` of) the left
/// boundary is moved so the edges coincide; otherwise the same is tried for
/// the right edge. The left check runs first, so a node wider than the
/// bounds ends up flush left.
pub fn h_bounds<A, B, T: Float>(node: &mut Node<A, T>, bounds: &Node<B, T>, tolerance: T) -> bool {
    if node.left() <= bounds.left() + tolerance {
        node.h_translate(bounds.left() - node.left());
    } else if node.right() + tolerance >= bounds.right() {
        node.h_translate(bounds.right() - node.right());
    } else {
        return false;
    }
    true
}

/// Vertical counterpart of [`h_bounds`]: top first, then bottom.
pub fn v_bounds<A, B, T: Float>(node: &mut Node<A, T>, bounds: &Node<B, T>, tolerance: T) -> bool {
    if node.top() <= bounds.top() + tolerance {
        node.v_translate(bounds.top() - node.top());
    } else if node.bottom() + tolerance >= bounds.bottom() {
        node.v_translate(bounds.bottom() - node.bottom());
    } else {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Edges, Size};

    const TOLERANCE: f64 = 10.0;

    fn node(top: f64, right: f64, bottom: f64, left: f64) -> Node<&'static str> {
        Node::new("node", Edges::new(top, right, bottom, left))
    }

    fn viewport() -> Node<&'static str> {
        Size::new(800.0, 600.0).bounds("viewport")
    }

    // ── h_bounds / v_bounds ─────────────────────────────────────────────

    #[test]
    fn h_bounds_pulls_back_past_left() {
        let mut n = node(100.0, 45.0, 150.0, -5.0);
        assert!(h_bounds(&mut n, &viewport(), TOLERANCE));
        assert_eq!(n.left(), 0.0);
        assert_eq!(n.right(), 50.0);
        assert_eq!(n.center_x(), 25.0);
    }

    #[test]
    fn h_bounds_pulls_back_past_right() {
        let mut n = node(100.0, 810.0, 150.0, 760.0);
        assert!(h_bounds(&mut n, &viewport(), TOLERANCE));
        assert_eq!(n.left(), 750.0);
        assert_eq!(n.right(), 800.0);
        assert_eq!(n.center_x(), 775.0);
    }

    #[test]
    fn v_bounds_pulls_back_past_top() {
        let mut n = node(-100.0, 100.0, -50.0, 50.0);
        assert!(v_bounds(&mut n, &viewport(), TOLERANCE));
        assert_eq!(n.top(), 0.0);
        assert_eq!(n.bottom(), 50.0);
        assert_eq!(n.center_y(), 25.0);
    }

    #[test]
    fn v_bounds_pulls_back_past_bottom() {
        let mut n = node(560.0, 100.0, 610.0, 50.0);
        assert!(v_bounds(&mut n, &viewport(), TOLERANCE));
        assert_eq!(n.top(), 550.0);
        assert_eq!(n.bottom(), 600.0);
        assert_eq!(n.center_y(), 575.0);
    }

    #[test]
    fn v_bounds_snaps_near_top() {
        let mut n = node(9.0, 100.0, 59.0, 50.0);
        assert!(v_bounds(&mut n, &viewport(), TOLERANCE));
        assert_eq!(n.top(), 0.0);
        assert_eq!(n.bottom(), 50.0);
        assert_eq!(n.center_y(), 25.0);
    }

    #[test]
    fn h_bounds_snaps_near_right() {
        let mut n = node(9.0, 790.0, 59.0, 740.0);
        assert!(h_bounds(&mut n, &viewport(), TOLERANCE));
        assert_eq!(n.left(), 750.0);
        assert_eq!(n.right(), 800.0);
        assert_eq!(n.center_x(), 775.0);
    }

    #[test]
    fn h_bounds_ignores_node_outside_tolerance() {
        let mut n = node(9.0, 789.0, 59.0, 739.0);
        assert!(!h_bounds(&mut n, &viewport(), TOLERANCE));
        assert_eq!(n.left(), 739.0);
        assert_eq!(n.right(), 789.0);
        assert_eq!(n.center_x(), 764.0);
    }

    #[test]
    fn bounds_leave_interior_node_alone() {
        let mut n = node(200.0, 400.0, 300.0, 300.0);
        let before = n.clone();
        assert!(!h_bounds(&mut n, &viewport(), TOLERANCE));
        assert!(!v_bounds(&mut n, &viewport(), TOLERANCE));
        assert_eq!(n, before);
    }

    #[test]
    fn h_bounds_prefers_left_for_oversized_node() {
        let mut n = node(100.0, 900.0, 150.0, -20.0);
        assert!(h_bounds(&mut n, &viewport(), TOLERANCE));
        assert_eq!(n.left(), 0.0);
        assert_eq!(n.right(), 920.0);
    }

    #[test]
    fn bounds_with_zero_size_viewport() {
        // A zero-width viewport puts every right edge past the boundary.
        let zero = Size::new(0.0, 0.0).bounds(());
        let mut n = node(5.0, 60.0, 55.0, 10.0);
        assert!(h_bounds(&mut n, &zero, 0.0));
        assert_eq!(n.right(), 0.0);
        assert_eq!(n.left(), -50.0);
    }

    // ── h_align / v_align ───────────────────────────────────────────────

    #[test]
    fn h_align_to_viewport_center_from_below() {
        let mut n = node(305.0, 200.0, 355.0, 150.0);
        assert!(h_align(&mut n, &viewport(), YFeature::CenterY, TOLERANCE));
        assert_eq!(n.top(), 300.0);
        assert_eq!(n.bottom(), 350.0);
        assert_eq!(n.center_y(), 325.0);
    }

    #[test]
    fn h_align_to_viewport_center_from_above() {
        let mut n = node(270.0, 200.0, 320.0, 150.0);
        assert!(h_align(&mut n, &viewport(), YFeature::CenterY, TOLERANCE));
        assert_eq!(n.top(), 275.0);
        assert_eq!(n.bottom(), 325.0);
        assert_eq!(n.center_y(), 300.0);
    }

    #[test]
    fn v_align_left_to_left() {
        let mut a = Node::new("a", Edges::new(150.0, 295.0, 200.0, 245.0));
        let b = Node::new("b", Edges::new(90.0, 300.0, 140.0, 250.0));
        assert!(v_align(&mut a, &b, XFeature::Left, TOLERANCE));
        assert_eq!(a.left(), 250.0);
        assert_eq!(a.right(), 300.0);
        assert_eq!(a.top(), 150.0);
        // reference untouched
        assert_eq!(b.left(), 250.0);
    }

    #[test]
    fn v_align_left_to_center() {
        let mut a = Node::new("a", Edges::new(150.0, 330.0, 200.0, 280.0));
        let b = Node::new("b", Edges::new(90.0, 300.0, 140.0, 250.0));
        assert!(v_align(&mut a, &b, XFeature::CenterX, TOLERANCE));
        assert_eq!(a.left(), 275.0);
        assert_eq!(a.right(), 325.0);
    }

    #[test]
    fn h_align_bottom_already_flush() {
        let mut a = Node::new("a", Edges::new(150.0, 300.0, 200.0, 250.0));
        let b = Node::new("b", Edges::new(100.0, 300.0, 150.0, 250.0));
        assert!(h_align(&mut a, &b, YFeature::Bottom, TOLERANCE));
        // a.top (150) matches b.bottom exactly → zero offset
        assert_eq!(a.top(), 150.0);
        assert_eq!(a.bottom(), 200.0);
    }

    #[test]
    fn v_align_left_beats_center() {
        // Subject 0..10: left (0) and center (5) are both within 10 of 8.
        let mut a = Node::new("a", Edges::new(0.0, 10.0, 10.0, 0.0));
        let b = Node::new("b", Edges::new(0.0, 20.0, 10.0, 8.0));
        assert!(v_align(&mut a, &b, XFeature::Left, TOLERANCE));
        assert_eq!(a.left(), 8.0);
        assert_eq!(a.right(), 18.0);
    }

    #[test]
    fn h_align_bottom_beats_top() {
        // Subject 0..10: bottom (10) and top (0) are both within 10 of 6.
        let mut a = Node::new("a", Edges::new(0.0, 10.0, 10.0, 0.0));
        let b = Node::new("b", Edges::new(6.0, 10.0, 30.0, 0.0));
        assert!(h_align(&mut a, &b, YFeature::Top, TOLERANCE));
        assert_eq!(a.bottom(), 6.0);
        assert_eq!(a.top(), -4.0);
        assert_eq!(a.center_y(), 1.0);
    }

    #[test]
    fn align_miss_leaves_subject_untouched() {
        let mut a = Node::new("a", Edges::new(0.0, 10.0, 10.0, 0.0));
        let before = a.clone();
        let b = Node::new("b", Edges::new(100.0, 200.0, 150.0, 100.0));
        assert!(!v_align(&mut a, &b, XFeature::Left, TOLERANCE));
        assert!(!h_align(&mut a, &b, YFeature::Top, TOLERANCE));
        assert_eq!(a, before);
    }

    #[test]
    fn align_is_idempotent() {
        let mut a = Node::new("a", Edges::new(150.0, 295.0, 200.0, 245.0));
        let b = Node::new("b", Edges::new(90.0, 300.0, 140.0, 250.0));
        assert!(v_align(&mut a, &b, XFeature::Left, TOLERANCE));
        let once = a.clone();
        assert!(v_align(&mut a, &b, XFeature::Left, TOLERANCE));
        assert_eq!(a, once);
    }
}
