use std::num::ParseIntError;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("malformed graph: {0}")]
    MalformedGraph(#[from] Malformed),

    #[error("no {} visits every vertex", tour_kind(.closed))]
    NoValidTour { closed: bool },

    #[error("tour weight overflowed")]
    WeightOverflow,

    #[error("{count} vertices exceeds the limit of {limit}")]
    TooManyVertices { count: usize, limit: usize },

    #[error("line {line}: unrecognised record `{text}`")]
    BadRecord { line: usize, text: String },

    #[error("line {line}: bad weight: {source}")]
    BadWeight {
        line: usize,
        #[source]
        source: ParseIntError,
    },
}

impl Error {
    /// True when the search ran to completion but nothing visited every
    /// vertex. Callers may treat this as "no tour" rather than a failure.
    pub fn is_no_tour(&self) -> bool {
        matches!(self, Error::NoValidTour { .. })
    }
}

fn tour_kind(closed: &bool) -> &'static str {
    if *closed {
        "cycle"
    } else {
        "path"
    }
}

/// The ways a graph can break the adjacency invariants.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Malformed {
    #[error("graph has no vertices")]
    Empty,

    #[error("edge `{from}` -> `{to}` has no reverse edge")]
    Asymmetric { from: String, to: String },

    #[error("edge `{from}` - `{to}` weighs {forward} one way and {backward} the other")]
    WeightMismatch {
        from: String,
        to: String,
        forward: String,
        backward: String,
    },

    #[error("vertex `{0}` has an edge to itself")]
    SelfLoop(String),

    #[error("vertex `{0}` is referenced but has no adjacency entry")]
    UnknownVertex(String),

    #[error("vertex `{0}` already exists")]
    DuplicateVertex(String),

    #[error("edge `{0}` - `{1}` is recorded twice")]
    DuplicateEdge(String, String),
}
