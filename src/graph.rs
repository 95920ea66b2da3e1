//! The weighted, undirected graph the tour search walks.

use std::collections::HashMap;
use std::fmt;

use crate::{Malformed, TourResult, VertexId, Weight};

/// A named, weighted graph stored as an adjacency mapping.
///
/// Each undirected edge is stored twice, once per direction. Vertices are
/// numbered in order of first appearance, and adjacency lists keep the
/// order in which their edges were recorded. The tour search walks both in
/// that order, so results are reproducible for a given input.
#[derive(Clone)]
pub struct Graph<W> {
    // Vertex names, indexed by VertexId.
    names: Vec<String>,

    index: HashMap<String, VertexId>,

    // The (neighbor, weight) pairs leaving each vertex.
    adjacency: Vec<Vec<(VertexId, W)>>,
}

impl<W: Weight> Graph<W> {
    /// Allocate an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// let graph = tour_solver::Graph::<i64>::new();
    /// assert!(graph.is_empty());
    /// ```
    pub fn new() -> Self {
        Graph {
            names: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Build a graph from a vertex to (neighbor, weight) mapping.
    ///
    /// Vertices are numbered in the order the entries are given. Every
    /// neighbor must have an entry of its own. Symmetry is not checked
    /// here; see [`Graph::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// let graph = tour_solver::Graph::from_adjacency(vec![
    ///     ("A", vec![("B", 3)]),
    ///     ("B", vec![("A", 3)]),
    /// ]).unwrap();
    /// assert_eq!(graph.len(), 2);
    /// ```
    pub fn from_adjacency<I, N, E>(entries: I) -> TourResult<Self>
    where
        I: IntoIterator<Item = (N, E)>,
        N: AsRef<str>,
        E: IntoIterator<Item = (N, W)>,
    {
        let entries = entries
            .into_iter()
            .map(|(name, edges)| (name, edges.into_iter().collect::<Vec<_>>()))
            .collect::<Vec<_>>();

        let mut graph = Graph::new();
        for (name, _) in entries.iter() {
            graph.add_vertex(name.as_ref());
        }

        for (name, edges) in entries.iter() {
            for (other, weight) in edges.iter() {
                if graph.vertex(other.as_ref()).is_none() {
                    return Err(Malformed::UnknownVertex(other.as_ref().to_string()).into());
                }
                graph.add_arc(name.as_ref(), other.as_ref(), *weight)?;
            }
        }

        Ok(graph)
    }

    /// Add a vertex, or look up the one already carrying this name.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = VertexId(self.names.len());
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add an undirected edge, recording it in both directions.
    ///
    /// Recording the same edge again with the same weight does nothing;
    /// with a different weight it is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut graph = tour_solver::Graph::new();
    /// graph.add_edge("London", "Dublin", 464).unwrap();
    ///
    /// let london = graph.vertex("London").unwrap();
    /// let dublin = graph.vertex("Dublin").unwrap();
    /// assert_eq!(graph.weight(dublin, london), Some(464));
    /// ```
    pub fn add_edge(&mut self, a: &str, b: &str, weight: W) -> TourResult<()> {
        if a == b {
            return Err(Malformed::SelfLoop(a.to_string()).into());
        }

        let from = self.add_vertex(a);
        let to = self.add_vertex(b);
        match self.weight(from, to) {
            Some(w) if w == weight => return Ok(()),
            Some(_) => return Err(Malformed::DuplicateEdge(a.to_string(), b.to_string()).into()),
            None => (),
        }

        self.add_arc(a, b, weight)?;
        self.add_arc(b, a, weight)
    }

    /// Record one direction of an edge.
    ///
    /// This is for adjacency data that lists each direction separately.
    /// The graph is only usable for a tour search once every arc has a
    /// matching reverse arc.
    pub fn add_arc(&mut self, from: &str, to: &str, weight: W) -> TourResult<()> {
        if from == to {
            return Err(Malformed::SelfLoop(from.to_string()).into());
        }

        let from_id = self.add_vertex(from);
        let to_id = self.add_vertex(to);
        if self.weight(from_id, to_id).is_some() {
            return Err(Malformed::DuplicateEdge(from.to_string(), to.to_string()).into());
        }

        self.adjacency[from_id.index()].push((to_id, weight));
        Ok(())
    }

    /// Add a vertex joined to every existing vertex by a zero-weight edge.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut graph = tour_solver::Graph::new();
    /// graph.add_edge("Alice", "Bob", 137).unwrap();
    /// let me = graph.add_neutral_vertex("me").unwrap();
    ///
    /// assert_eq!(graph.neighbors(me).len(), 2);
    /// ```
    pub fn add_neutral_vertex(&mut self, name: &str) -> TourResult<VertexId> {
        if self.index.contains_key(name) {
            return Err(Malformed::DuplicateVertex(name.to_string()).into());
        }

        let others = self.names.clone();
        let id = self.add_vertex(name);
        for other in others.iter() {
            self.add_edge(name, other, W::zero())?;
        }

        Ok(id)
    }

    /// Check that every arc has a reverse arc of the same weight.
    pub fn validate(&self) -> TourResult<()> {
        if self.is_empty() {
            return Err(Malformed::Empty.into());
        }

        for from in self.vertices() {
            for &(to, forward) in self.neighbors(from) {
                if from == to {
                    return Err(Malformed::SelfLoop(self.name(from).to_string()).into());
                }

                match self.weight(to, from) {
                    None => {
                        return Err(Malformed::Asymmetric {
                            from: self.name(from).to_string(),
                            to: self.name(to).to_string(),
                        }
                        .into())
                    }
                    Some(backward) if backward != forward => {
                        return Err(Malformed::WeightMismatch {
                            from: self.name(from).to_string(),
                            to: self.name(to).to_string(),
                            forward: forward.to_string(),
                            backward: backward.to_string(),
                        }
                        .into())
                    }
                    Some(_) => (),
                }
            }
        }

        Ok(())
    }

    /// Look up a vertex by name.
    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// Get the name of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if the vertex belongs to another graph.
    pub fn name(&self, vertex: VertexId) -> &str {
        &self.names[vertex.index()]
    }

    /// The number of vertices.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All vertices, in order of first appearance.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.names.len()).map(VertexId)
    }

    /// The (neighbor, weight) pairs leaving a vertex, in recording order.
    pub fn neighbors(&self, vertex: VertexId) -> &[(VertexId, W)] {
        &self.adjacency[vertex.index()]
    }

    /// The weight of the arc from `from` to `to`, if there is one.
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.neighbors(from)
            .iter()
            .find(|&&(other, _)| other == to)
            .map(|&(_, weight)| weight)
    }

    /// Map a path of vertices to their names.
    pub fn path_names(&self, path: &[VertexId]) -> Vec<&str> {
        path.iter().map(|&v| self.name(v)).collect()
    }
}

impl<W: Weight> Default for Graph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> fmt::Debug for Graph<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "Graph={{")?;
        for from in self.vertices() {
            writeln!(f)?;
            write!(f, "  {}:", self.name(from))?;
            for &(to, weight) in self.neighbors(from) {
                write!(f, " {}={}", self.name(to), weight)?;
            }
        }
        write!(f, "}}")?;
        Ok(())
    }
}
