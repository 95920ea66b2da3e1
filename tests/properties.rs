//! Properties of the exhaustive tour search.

use tour_solver::*;

fn make_triangle() -> Graph<i64> {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 1).unwrap();
    graph.add_edge("B", "C", 2).unwrap();
    graph.add_edge("A", "C", 5).unwrap();
    graph
}

fn make_complete(n: usize) -> Graph<i64> {
    let mut graph = Graph::new();
    for a in 0..n {
        for b in (a + 1)..n {
            let weight = (a * 7 + b * 3) as i64;
            graph.add_edge(&format!("v{}", a), &format!("v{}", b), weight).unwrap();
        }
    }
    graph
}

/// Every ordering of `0..n`, by plain recursion.
fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn go(rest: &mut Vec<usize>, prefix: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if rest.is_empty() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..rest.len() {
            let v = rest.remove(i);
            prefix.push(v);
            go(rest, prefix, out);
            prefix.pop();
            rest.insert(i, v);
        }
    }

    let mut out = Vec::new();
    go(&mut (0..n).collect(), &mut Vec::new(), &mut out);
    out
}

fn names(graph: &Graph<i64>, path: &[VertexId]) -> String {
    graph.path_names(path).join("-")
}

/*--------------------------------------------------------------*/

#[test]
fn rejects_asymmetric_graph() {
    let graph = Graph::from_adjacency(vec![
        ("A", vec![("B", 1), ("C", 5)]),
        ("B", vec![("A", 1), ("C", 2)]),
        ("C", vec![("A", 5)]),
    ])
    .unwrap();

    let err = extremal_tours(&graph, false).unwrap_err();
    assert_eq!(
        err,
        Error::MalformedGraph(Malformed::Asymmetric {
            from: "B".to_string(),
            to: "C".to_string()
        })
    );
    assert!(!err.is_no_tour());
}

#[test]
fn rejects_mismatched_weights() {
    let graph = Graph::from_adjacency(vec![("A", vec![("B", 1)]), ("B", vec![("A", 2)])]).unwrap();
    assert!(matches!(
        extremal_tours(&graph, true),
        Err(Error::MalformedGraph(Malformed::WeightMismatch { .. }))
    ));
}

#[test]
fn rejects_empty_graph() {
    let graph = Graph::<i64>::new();
    assert_eq!(
        extremal_tours(&graph, false),
        Err(Error::MalformedGraph(Malformed::Empty))
    );
}

#[test]
fn complete_graph_path_counts() {
    for n in 3..=5 {
        let graph = make_complete(n);
        let expected = permutations(n).len();

        assert_eq!(count_tours(&graph, false).unwrap(), expected);
        // Every ordering of a complete graph closes into a cycle.
        assert_eq!(count_tours(&graph, true).unwrap(), expected);
    }
}

#[test]
fn complete_graph_matches_brute_force() {
    for n in 3..=5 {
        let graph = make_complete(n);
        let vertices = graph.vertices().collect::<Vec<_>>();

        let mut reference = permutations(n)
            .into_iter()
            .map(|order| order.into_iter().map(|i| vertices[i]).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        reference.sort();

        let tours = enumerate_tours(&graph, false).unwrap();
        let mut found = tours.iter().map(|t| t.path.clone()).collect::<Vec<_>>();
        found.sort();
        assert_eq!(found, reference);

        for tour in tours.iter() {
            let total: i64 = tour
                .path
                .windows(2)
                .map(|pair| graph.weight(pair[0], pair[1]).unwrap())
                .sum();
            assert_eq!(tour.total, total);
        }

        let tours = extremal_tours(&graph, false).unwrap();
        let lightest = found
            .iter()
            .map(|path| {
                path.windows(2)
                    .map(|pair| graph.weight(pair[0], pair[1]).unwrap())
                    .sum::<i64>()
            })
            .min()
            .unwrap();
        assert_eq!(tours.min_total, lightest);
    }
}

#[test]
fn triangle_paths() {
    let graph = make_triangle();
    let tours = extremal_tours(&graph, false).unwrap();

    // A-B-C = 3, A-C-B = 7, B-A-C = 6 and their reverses.
    assert_eq!(tours.min_total, 3);
    assert_eq!(tours.max_total, 7);
    assert_eq!(names(&graph, &tours.min_path), "A-B-C");
    assert_eq!(names(&graph, &tours.max_path), "A-C-B");
}

#[test]
fn triangle_cycle() {
    let graph = make_triangle();
    let tours = extremal_tours(&graph, true).unwrap();

    assert_eq!(tours.min_total, 1 + 2 + 5);
    assert_eq!(tours.max_total, 1 + 2 + 5);
    assert_eq!(names(&graph, &tours.min_path), "A-B-C");
}

#[test]
fn isolated_vertex_has_no_tour() {
    let mut graph = make_triangle();
    graph.add_vertex("D");

    let err = extremal_tours(&graph, false).unwrap_err();
    assert_eq!(err, Error::NoValidTour { closed: false });
    assert!(err.is_no_tour());

    assert_eq!(
        extremal_tours(&graph, true),
        Err(Error::NoValidTour { closed: true })
    );
    assert_eq!(count_tours(&graph, false).unwrap(), 0);
}

#[test]
fn path_without_cycle() {
    // A line has Hamiltonian paths but no Hamiltonian cycle.
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 4).unwrap();
    graph.add_edge("B", "C", 4).unwrap();
    graph.add_edge("C", "D", 4).unwrap();

    assert_eq!(extremal_tours(&graph, false).unwrap().min_total, 12);
    assert!(extremal_tours(&graph, true).unwrap_err().is_no_tour());
}

#[test]
fn zero_weight_tour_is_found() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 0).unwrap();
    graph.add_edge("B", "C", 0).unwrap();

    let tours = extremal_tours(&graph, false).unwrap();
    assert_eq!(tours.min_total, 0);
    assert_eq!(tours.max_total, 0);
}

#[test]
fn repeated_searches_agree() {
    let graph = make_complete(5);
    let first = extremal_tours(&graph, true).unwrap();
    let second = extremal_tours(&graph, true).unwrap();
    assert_eq!(first, second);
}
