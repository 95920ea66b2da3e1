//! Seating the knights: the happiest circular table.
//!
//! https://adventofcode.com/2015/day/13

use tour_solver::*;

const GUESTS: &str = "\
Alice would gain 54 happiness units by sitting next to Bob.
Alice would lose 79 happiness units by sitting next to Carol.
Alice would lose 2 happiness units by sitting next to David.
Bob would gain 83 happiness units by sitting next to Alice.
Bob would lose 7 happiness units by sitting next to Carol.
Bob would lose 63 happiness units by sitting next to David.
Carol would lose 62 happiness units by sitting next to Alice.
Carol would gain 60 happiness units by sitting next to Bob.
Carol would gain 55 happiness units by sitting next to David.
David would gain 46 happiness units by sitting next to Alice.
David would lose 7 happiness units by sitting next to Bob.
David would gain 41 happiness units by sitting next to Carol.
";

#[test]
fn seating_example() {
    let graph = parse::seating_graph(GUESTS).unwrap();
    let tours = extremal_tours(&graph, true).unwrap();

    assert_eq!(tours.max_total, 330);
    assert_eq!(tours.min_total, -114);
    assert_eq!(
        graph.path_names(&tours.max_path),
        vec!["Alice", "Bob", "Carol", "David"]
    );
}

#[test]
fn seating_example_with_neutral_guest() {
    let mut graph = parse::seating_graph(GUESTS).unwrap();
    graph.add_neutral_vertex("you").unwrap();

    // Seating a neutral guest breaks the table open into its best line.
    let tours = extremal_tours(&graph, true).unwrap();
    assert_eq!(tours.max_total, 286);

    let people = parse::seating_graph(GUESTS).unwrap();
    assert_eq!(extremal_tours(&people, false).unwrap().max_total, 286);
}

#[test]
fn seating_example_held_karp() {
    let mut graph = parse::seating_graph(GUESTS).unwrap();
    let totals = held_karp::extremal_totals(&graph, true).unwrap();
    assert_eq!(totals.max_total, 330);
    assert_eq!(totals.min_total, -114);

    graph.add_neutral_vertex("you").unwrap();
    assert_eq!(held_karp::extremal_totals(&graph, true).unwrap().max_total, 286);
}

#[test]
fn seating_cycle_counts() {
    let graph = parse::seating_graph(GUESTS).unwrap();
    // 3 distinct tables, read from 4 seats in 2 directions.
    assert_eq!(count_tours(&graph, true).unwrap(), 24);
}
