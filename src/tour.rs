//! Exhaustive search for Hamiltonian paths and cycles.

use bit_set::BitSet;
use tracing::{debug, trace};

use crate::{add, Error, Graph, TourResult, VertexId, Weight};

/// A complete path through the graph, with its total weight.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tour<W> {
    pub path: Vec<VertexId>,
    pub total: W,
}

/// The lightest and heaviest tours of a graph.
///
/// On a tie the tour found first is kept.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Extremes<W> {
    pub min_total: W,
    pub max_total: W,
    pub min_path: Vec<VertexId>,
    pub max_path: Vec<VertexId>,
}

/// Intermediate tour search state.
///
/// The path is a push/pop buffer: each step pushes a vertex, recurses and
/// pops it again, so sibling branches never share a partial path.
struct TourSearch<'a, W> {
    graph: &'a Graph<W>,
    close_cycle: bool,
    path: Vec<VertexId>,

    // The vertices on the current path.
    visited: BitSet,

    // The number of complete tours found.
    num_tours: usize,
}

/*--------------------------------------------------------------*/

/// Find the lightest and heaviest Hamiltonian paths of a graph.
///
/// Every vertex is tried as a start, in order of first appearance, and
/// each adjacency list is walked in recording order. With `close_cycle`
/// a path only counts if its last vertex has an edge back to its first,
/// and that edge's weight is added to the total.
///
/// The search visits up to V! paths; keep graphs to a dozen or so vertices.
///
/// # Examples
///
/// ```
/// let mut graph = tour_solver::Graph::new();
/// graph.add_edge("London", "Dublin", 464).unwrap();
/// graph.add_edge("London", "Belfast", 518).unwrap();
/// graph.add_edge("Dublin", "Belfast", 141).unwrap();
///
/// let routes = tour_solver::extremal_tours(&graph, false).unwrap();
/// assert_eq!(routes.min_total, 605);
/// assert_eq!(routes.max_total, 982);
/// ```
pub fn extremal_tours<W: Weight>(graph: &Graph<W>, close_cycle: bool) -> TourResult<Extremes<W>> {
    let mut best: Option<Extremes<W>> = None;

    let mut search = TourSearch::new(graph, close_cycle)?;
    search.solve(&mut |path, total| {
        match best {
            None => {
                best = Some(Extremes {
                    min_total: total,
                    max_total: total,
                    min_path: path.to_vec(),
                    max_path: path.to_vec(),
                });
            }
            Some(ref mut current) => {
                if total < current.min_total {
                    current.min_total = total;
                    current.min_path = path.to_vec();
                }
                if total > current.max_total {
                    current.max_total = total;
                    current.max_path = path.to_vec();
                }
            }
        }
        Ok(())
    })?;

    best.ok_or(Error::NoValidTour {
        closed: close_cycle,
    })
}

/// List every complete tour, in search order.
///
/// On an undirected graph each tour appears once per direction, and for
/// cycles once per starting vertex as well.
pub fn enumerate_tours<W: Weight>(graph: &Graph<W>, close_cycle: bool) -> TourResult<Vec<Tour<W>>> {
    let mut tours = Vec::new();

    let mut search = TourSearch::new(graph, close_cycle)?;
    search.solve(&mut |path, total| {
        tours.push(Tour {
            path: path.to_vec(),
            total,
        });
        Ok(())
    })?;

    Ok(tours)
}

/// Count the complete tours without keeping them.
pub fn count_tours<W: Weight>(graph: &Graph<W>, close_cycle: bool) -> TourResult<usize> {
    let mut search = TourSearch::new(graph, close_cycle)?;
    search.solve(&mut |_, _| Ok(()))?;
    Ok(search.num_tours)
}

/*--------------------------------------------------------------*/

impl<'a, W: Weight> TourSearch<'a, W> {
    /// Allocate a new tour searcher, rejecting malformed graphs.
    fn new(graph: &'a Graph<W>, close_cycle: bool) -> TourResult<Self> {
        graph.validate()?;

        Ok(TourSearch {
            graph,
            close_cycle,
            path: Vec::with_capacity(graph.len()),
            visited: BitSet::with_capacity(graph.len()),
            num_tours: 0,
        })
    }

    /// Run the search from every starting vertex, handing each complete
    /// tour to `found`.
    fn solve<F>(&mut self, found: &mut F) -> TourResult<()>
    where
        F: FnMut(&[VertexId], W) -> TourResult<()>,
    {
        debug!(
            vertices = self.graph.len(),
            close_cycle = self.close_cycle,
            "starting tour search"
        );

        for start in self.graph.vertices() {
            self.push(start);
            let result = self.extend(W::zero(), found);
            self.pop();
            result?;
        }

        debug!(tours = self.num_tours, "tour search finished");
        Ok(())
    }

    /// Extend the current path with every unvisited neighbor of its last
    /// vertex.
    fn extend<F>(&mut self, total: W, found: &mut F) -> TourResult<()>
    where
        F: FnMut(&[VertexId], W) -> TourResult<()>,
    {
        if self.path.len() == self.graph.len() {
            return self.complete(total, found);
        }

        let graph = self.graph;
        let last = match self.path.last() {
            Some(&last) => last,
            None => return Ok(()),
        };

        for &(next, weight) in graph.neighbors(last) {
            if self.visited.contains(next.index()) {
                continue;
            }

            let total = add(total, weight)?;
            self.push(next);
            let result = self.extend(total, found);
            self.pop();
            result?;
        }

        Ok(())
    }

    /// Score a path that visits every vertex.
    fn complete<F>(&mut self, total: W, found: &mut F) -> TourResult<()>
    where
        F: FnMut(&[VertexId], W) -> TourResult<()>,
    {
        let total = if self.close_cycle {
            let (first, last) = match (self.path.first(), self.path.last()) {
                (Some(&first), Some(&last)) => (first, last),
                _ => return Ok(()),
            };

            match self.graph.weight(last, first) {
                Some(weight) => add(total, weight)?,
                // Cannot close the cycle.
                None => return Ok(()),
            }
        } else {
            total
        };

        self.num_tours += 1;
        trace!(path = ?self.graph.path_names(&self.path), %total, "tour");
        found(&self.path, total)
    }

    fn push(&mut self, vertex: VertexId) {
        self.path.push(vertex);
        self.visited.insert(vertex.index());
    }

    fn pop(&mut self) {
        if let Some(vertex) = self.path.pop() {
            self.visited.remove(vertex.index());
        }
    }
}
