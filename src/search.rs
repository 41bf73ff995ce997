//! Nearest-neighbor selection over candidate rectangles.

use alloc::vec::Vec;

use num_traits::Float;

use crate::node::{Axis, Node};

/// Comparison key for the neighbor search.
///
/// The x search compares `bottom` and the y search compares `left`. Callers
/// depend on this pairing; do not swap it without checking them.
fn search_key<Id, T: Float>(node: &Node<Id, T>, axis: Axis) -> T {
    match axis {
        Axis::X => node.bottom(),
        Axis::Y => node.left(),
    }
}

/// Find the candidate closest to `node` along `axis`.
///
/// Distance is the absolute difference of the axis' comparison key (see
/// module docs). On ties the earlier candidate wins. Returns `None` when
/// there are no candidates.
pub fn closest_node<'a, A, B, T, I>(node: &Node<A, T>, candidates: I, axis: Axis) -> Option<&'a Node<B, T>>
where
    T: Float + 'a,
    B: 'a,
    I: IntoIterator<Item = &'a Node<B, T>>,
{
    let probe = search_key(node, axis);
    let distance = |n: &Node<B, T>| (search_key(n, axis) - probe).abs();
    candidates.into_iter().reduce(|best, current| {
        if distance(current) < distance(best) {
            current
        } else {
            best
        }
    })
}

/// Candidates whose id differs from `id`, in their original order.
///
/// An `id` that is not present is not an error; every candidate is kept.
pub fn remove_node<'a, Id, T, I>(id: &Id, candidates: I) -> Vec<&'a Node<Id, T>>
where
    Id: PartialEq + 'a,
    T: 'a,
    I: IntoIterator<Item = &'a Node<Id, T>>,
{
    candidates.into_iter().filter(|n| n.id != *id).collect()
}
