//! This crate finds the extremal Hamiltonian paths and cycles of small
//! weighted graphs.
//!
//! Every simple path that visits each vertex exactly once is enumerated,
//! starting from every vertex, and the lightest and heaviest totals are
//! reported. The search is exhaustive, so it is only practical for about a
//! dozen vertices; [`held_karp`] trades path identity for a faster
//! computation of the totals alone.

pub mod held_karp;
pub mod parse;

mod error;
mod graph;
mod tour;

use num_traits::{CheckedAdd, Zero};
use std::fmt;

pub use error::{Error, Malformed};
pub use graph::Graph;
pub use tour::{count_tours, enumerate_tours, extremal_tours, Extremes, Tour};

/// A graph vertex token.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    /// The position of the vertex in order of first appearance.
    pub fn index(self) -> usize {
        let VertexId(idx) = self;
        idx
    }
}

/// The type of an edge weight (distances, happiness deltas, ...).
///
/// Sums are checked, so a tour that overflows is reported rather than
/// wrapped.
pub trait Weight: Copy + Ord + Zero + CheckedAdd + fmt::Debug + fmt::Display {}

impl<T> Weight for T where T: Copy + Ord + Zero + CheckedAdd + fmt::Debug + fmt::Display {}

/// A result during a tour search.
pub type TourResult<T> = Result<T, Error>;

pub(crate) fn add<W: Weight>(lhs: W, rhs: W) -> TourResult<W> {
    lhs.checked_add(&rhs).ok_or(Error::WeightOverflow)
}
