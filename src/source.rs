//! Host-supplied geometry.
//!
//! The snapping code never reaches for live UI state. Hosts implement
//! [`RectSource`] to resolve an identifier to edges and [`ViewportSource`]
//! to report the container size; both are passed into the orchestration
//! explicitly.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use num_traits::Float;

use crate::node::{Edges, Node, Size};

/// Resolves an identifier to the current edges of its rectangle.
pub trait RectSource<Id, T> {
    /// Lookup failure. Propagated unchanged to the caller of the snap.
    type Error;

    fn edges(&self, id: &Id) -> Result<Edges<T>, Self::Error>;
}

/// Reports the size of the container rectangles are snapped within.
pub trait ViewportSource<T> {
    fn viewport_size(&self) -> Size<T>;
}

/// A [`BTreeMap`] source has no entry for this identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownId<Id>(pub Id);

impl<Id: fmt::Debug> fmt::Display for UnknownId<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no rectangle for id {:?}", self.0)
    }
}

impl<Id: fmt::Debug> core::error::Error for UnknownId<Id> {}

impl<Id: Ord + Clone, T: Copy> RectSource<Id, T> for BTreeMap<Id, Edges<T>> {
    type Error = UnknownId<Id>;

    fn edges(&self, id: &Id) -> Result<Edges<T>, Self::Error> {
        self.get(id).copied().ok_or_else(|| UnknownId(id.clone()))
    }
}

impl<Id, T, S: RectSource<Id, T> + ?Sized> RectSource<Id, T> for &S {
    type Error = S::Error;

    fn edges(&self, id: &Id) -> Result<Edges<T>, Self::Error> {
        (**self).edges(id)
    }
}

impl<T: Copy> ViewportSource<T> for Size<T> {
    fn viewport_size(&self) -> Size<T> {
        *self
    }
}

impl<T, V: ViewportSource<T> + ?Sized> ViewportSource<T> for &V {
    fn viewport_size(&self) -> Size<T> {
        (**self).viewport_size()
    }
}

impl<Id, T: Float> Node<Id, T> {
    /// Create a node whose edges come from `source`.
    pub fn from_source<S>(id: Id, source: &S) -> Result<Self, S::Error>
    where
        S: RectSource<Id, T> + ?Sized,
    {
        let edges = source.edges(&id)?;
        Ok(Self::new(id, edges))
    }
}

/// Build a node for each identifier, in order. Stops at the first id the
/// source cannot resolve.
pub fn nodes_from_ids<Id, T, S>(ids: &[Id], source: &S) -> Result<Vec<Node<Id, T>>, S::Error>
where
    Id: Clone,
    T: Float,
    S: RectSource<Id, T> + ?Sized,
{
    ids.iter()
        .map(|id| Node::from_source(id.clone(), source))
        .collect()
}
