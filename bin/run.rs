//! Solve a route or seating puzzle input.
//!
//! ```text
//! run routes input.txt          # shortest and longest route
//! run seating input.txt         # happiest table, then with you seated too
//! run seating input.txt --held-karp
//! ```
//!
//! Set `RUST_LOG=tour_solver=debug` to see search statistics.

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use tour_solver::{extremal_tours, held_karp, parse, Graph};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: run <routes|seating> <input-file> [--held-karp]";

/// The guest added to the seating plan for the second answer.
const NEUTRAL_GUEST: &str = "you";

#[derive(Clone, Copy)]
enum Puzzle {
    Routes,
    Seating,
}

struct Args {
    puzzle: Puzzle,
    input: String,
    held_karp: bool,
}

fn parse_args() -> Result<Args> {
    let mut puzzle = None;
    let mut input = None;
    let mut held_karp = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--held-karp" => held_karp = true,
            "-h" | "--help" => bail!(USAGE),
            "routes" if puzzle.is_none() => puzzle = Some(Puzzle::Routes),
            "seating" if puzzle.is_none() => puzzle = Some(Puzzle::Seating),
            flag if flag.starts_with("--") => bail!("unknown flag `{}`\n{}", flag, USAGE),
            path if puzzle.is_some() && input.is_none() => input = Some(path.to_string()),
            other => bail!("unexpected argument `{}`\n{}", other, USAGE),
        }
    }

    match (puzzle, input) {
        (Some(puzzle), Some(input)) => Ok(Args {
            puzzle,
            input,
            held_karp,
        }),
        _ => bail!(USAGE),
    }
}

/// The (min, max) totals, by enumeration or by Held-Karp.
fn totals(graph: &Graph<i64>, close_cycle: bool, held_karp: bool) -> Result<(i64, i64)> {
    if held_karp {
        let totals = held_karp::extremal_totals(graph, close_cycle)?;
        Ok((totals.min_total, totals.max_total))
    } else {
        let tours = extremal_tours(graph, close_cycle)?;
        tracing::info!(
            min = ?graph.path_names(&tours.min_path),
            max = ?graph.path_names(&tours.max_path),
            "extremal tours"
        );
        Ok((tours.min_total, tours.max_total))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("could not read `{}`", args.input))?;

    match args.puzzle {
        Puzzle::Routes => {
            let graph = parse::routes_graph(&text).context("bad route list")?;
            let (shortest, longest) = totals(&graph, false, args.held_karp)?;
            println!("{}", shortest);
            println!("{}", longest);
        }
        Puzzle::Seating => {
            let mut graph = parse::seating_graph(&text).context("bad seating list")?;
            let (_, happiest) = totals(&graph, true, args.held_karp)?;
            println!("{}", happiest);

            graph.add_neutral_vertex(NEUTRAL_GUEST)?;
            let (_, happiest) = totals(&graph, true, args.held_karp)?;
            println!("{}", happiest);
        }
    }

    Ok(())
}
