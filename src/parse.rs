//! Parsers for the route and seating puzzle inputs.
//!
//! ```text
//! London to Dublin = 464
//! Alice would gain 54 happiness units by sitting next to Bob.
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::{Error, Graph, Malformed, TourResult};

/// One edge record from a puzzle input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

fn route_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\w+) to (\w+) = (\d+)$").expect("route regex"))
}

fn seating_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\w+) would (gain|lose) (\d+) happiness units? by sitting next to (\w+)\.$")
            .expect("seating regex")
    })
}

/// Parse an `A to B = N` distance record.
///
/// Returns `None` if the line has another shape, and an error if the
/// distance does not fit.
///
/// # Examples
///
/// ```
/// let record = tour_solver::parse::route("London to Dublin = 464").unwrap().unwrap();
/// assert_eq!(record.weight, 464);
/// ```
pub fn route(line: &str) -> Option<Result<Record, std::num::ParseIntError>> {
    let caps = route_re().captures(line.trim())?;
    Some(caps[3].parse().map(|weight| Record {
        from: caps[1].to_string(),
        to: caps[2].to_string(),
        weight,
    }))
}

/// Parse an `A would gain/lose N happiness units by sitting next to B.`
/// record. A loss is a negative weight.
pub fn seating(line: &str) -> Option<Result<Record, std::num::ParseIntError>> {
    let caps = seating_re().captures(line.trim())?;
    Some(caps[3].parse::<i64>().map(|amount| Record {
        from: caps[1].to_string(),
        to: caps[4].to_string(),
        weight: if &caps[2] == "lose" { -amount } else { amount },
    }))
}

/// Read every non-blank line with `parser`, numbering lines from 1.
fn records<P>(input: &str, parser: P) -> TourResult<Vec<Record>>
where
    P: Fn(&str) -> Option<Result<Record, std::num::ParseIntError>>,
{
    let mut records = Vec::new();
    for (idx, text) in input.lines().enumerate() {
        if text.trim().is_empty() {
            continue;
        }

        let line = idx + 1;
        match parser(text) {
            Some(Ok(record)) => records.push(record),
            Some(Err(source)) => return Err(Error::BadWeight { line, source }),
            None => {
                return Err(Error::BadRecord {
                    line,
                    text: text.to_string(),
                })
            }
        }
    }

    debug!(records = records.len(), "parsed input");
    Ok(records)
}

/// Build the distance graph from a list of routes.
///
/// # Examples
///
/// ```
/// let graph = tour_solver::parse::routes_graph("\
/// London to Dublin = 464
/// London to Belfast = 518
/// Dublin to Belfast = 141
/// ").unwrap();
/// assert_eq!(graph.len(), 3);
/// ```
pub fn routes_graph(input: &str) -> TourResult<Graph<i64>> {
    let mut graph = Graph::new();
    for record in records(input, route)? {
        graph.add_edge(&record.from, &record.to, record.weight)?;
    }

    Ok(graph)
}

/// Build the seating graph from happiness records.
///
/// Each pair of neighbors is one undirected edge weighing the sum of both
/// people's happiness change. Both directions must be given.
pub fn seating_graph(input: &str) -> TourResult<Graph<i64>> {
    let records = records(input, seating)?;

    let mut deltas: HashMap<(&str, &str), i64> = HashMap::new();
    for record in records.iter() {
        let key = (record.from.as_str(), record.to.as_str());
        if deltas.insert(key, record.weight).is_some() {
            return Err(Malformed::DuplicateEdge(record.from.clone(), record.to.clone()).into());
        }
    }

    let mut graph = Graph::new();
    for record in records.iter() {
        if record.from == record.to {
            return Err(Malformed::SelfLoop(record.from.clone()).into());
        }

        let back = match deltas.get(&(record.to.as_str(), record.from.as_str())) {
            Some(&back) => back,
            None => {
                return Err(Malformed::Asymmetric {
                    from: record.from.clone(),
                    to: record.to.clone(),
                }
                .into())
            }
        };

        let net = record.weight.checked_add(back).ok_or(Error::WeightOverflow)?;
        graph.add_edge(&record.from, &record.to, net)?;
    }

    Ok(graph)
}
