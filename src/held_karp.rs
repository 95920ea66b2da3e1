//! Held-Karp dynamic programming over (visited set, last vertex).
//!
//! This computes the same extremal totals as [`crate::extremal_tours`] in
//! O(2^V * V^2) time instead of O(V!), and agrees with it on whether any
//! tour exists. It does not track which path achieves a total.

use bit_set::BitSet;
use tracing::debug;

use crate::{add, Error, Graph, TourResult, Weight};

/// The largest graph the tables are built for.
pub const MAX_VERTICES: usize = 16;

/// The lightest and heaviest tour totals of a graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Totals<W> {
    pub min_total: W,
    pub max_total: W,
}

impl<W: Weight> Totals<W> {
    fn point(total: W) -> Self {
        Totals {
            min_total: total,
            max_total: total,
        }
    }

    fn widen(&mut self, other: Totals<W>) {
        self.min_total = self.min_total.min(other.min_total);
        self.max_total = self.max_total.max(other.max_total);
    }

    fn plus(self, weight: W) -> TourResult<Self> {
        Ok(Totals {
            min_total: add(self.min_total, weight)?,
            max_total: add(self.max_total, weight)?,
        })
    }
}

/// Compute the extremal path (or cycle) totals of a graph.
///
/// A cycle has the same weight whichever vertex it is read from, so cycles
/// are only grown from the first vertex.
///
/// # Examples
///
/// ```
/// use tour_solver::{held_karp, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1).unwrap();
/// graph.add_edge("B", "C", 2).unwrap();
/// graph.add_edge("A", "C", 5).unwrap();
///
/// let totals = held_karp::extremal_totals(&graph, false).unwrap();
/// assert_eq!((totals.min_total, totals.max_total), (3, 7));
/// ```
pub fn extremal_totals<W: Weight>(graph: &Graph<W>, close_cycle: bool) -> TourResult<Totals<W>> {
    graph.validate()?;

    let n = graph.len();
    if n > MAX_VERTICES {
        return Err(Error::TooManyVertices {
            count: n,
            limit: MAX_VERTICES,
        });
    }

    // Dense copy of the adjacency, indexed [from * n + to].
    let mut weights = vec![None; n * n];
    for from in graph.vertices() {
        for &(to, weight) in graph.neighbors(from) {
            weights[from.index() * n + to.index()] = Some(weight);
        }
    }

    let full = (1usize << n) - 1;

    // best[set * n + last]: totals of the paths covering `set` that end at
    // `last`.
    let mut best: Vec<Option<Totals<W>>> = vec![None; (full + 1) * n];
    let starts = if close_cycle { 1 } else { n };
    for start in 0..starts {
        best[(1 << start) * n + start] = Some(Totals::point(W::zero()));
    }

    // Adding a vertex only ever sets a bit, so every set is finished before
    // any larger set reads it.
    for set in 1..full {
        let members = bits(set, n);
        for last in members.iter() {
            let here = match best[set * n + last] {
                Some(here) => here,
                None => continue,
            };

            for next in (0..n).filter(|next| !members.contains(*next)) {
                let weight = match weights[last * n + next] {
                    Some(weight) => weight,
                    None => continue,
                };

                let extended = here.plus(weight)?;
                let slot = &mut best[(set | 1 << next) * n + next];
                match *slot {
                    Some(ref mut totals) => totals.widen(extended),
                    None => *slot = Some(extended),
                }
            }
        }
    }

    let mut result: Option<Totals<W>> = None;
    for last in 0..n {
        let here = match best[full * n + last] {
            Some(here) => here,
            None => continue,
        };

        let complete = if close_cycle {
            match weights[last * n] {
                Some(weight) => here.plus(weight)?,
                None => continue,
            }
        } else {
            here
        };

        match result {
            Some(ref mut totals) => totals.widen(complete),
            None => result = Some(complete),
        }
    }

    debug!(vertices = n, close_cycle, found = result.is_some(), "held-karp finished");
    result.ok_or(Error::NoValidTour {
        closed: close_cycle,
    })
}

fn bits(set: usize, n: usize) -> BitSet {
    let mut members = BitSet::with_capacity(n);
    for idx in (0..n).filter(|idx| set & 1 << idx != 0) {
        members.insert(idx);
    }
    members
}
