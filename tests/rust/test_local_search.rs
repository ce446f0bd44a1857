use super::*;
use crate::crossing::count_crossings;

const NODES: [&str; 5] = ["Amina", "Diego", "Liam", "Mei", "Zanele"];
const EDGES: [(&str, &str); 7] = [
    ("Amina", "Liam"),
    ("Diego", "Zanele"),
    ("Amina", "Mei"),
    ("Mei", "Zanele"),
    ("Liam", "Zanele"),
    ("Diego", "Mei"),
    ("Amina", "Zanele"),
];

fn groups(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(n, g)| (n.to_string(), g.to_string()))
        .collect()
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

// ── Full-range search ────────────────────────────────────────────────────

#[test]
fn test_single_crossing_resolved_by_first_swap() {
    let refined = local_search(&["A", "B", "C", "D"], &[("A", "C"), ("B", "D")], None).unwrap();
    assert_eq!(refined.ordering, vec!["B", "A", "C", "D"]);
    assert_eq!(refined.crossings, 0);
}

#[test]
fn test_five_node_scenario() {
    let refined = local_search(&NODES, &EDGES, None).unwrap();
    assert_eq!(refined.crossings, 0);
    assert_eq!(refined.ordering, vec!["Liam", "Zanele", "Diego", "Mei", "Amina"]);
    assert_eq!(count_crossings(&refined.ordering, &EDGES).unwrap(), refined.crossings);
}

#[test]
fn test_never_worse_than_input() {
    let ordering = ["Zanele", "Liam", "Amina", "Mei", "Diego"];
    let before = count_crossings(&ordering, &EDGES).unwrap();
    let refined = local_search(&ordering, &EDGES, None).unwrap();
    assert!(refined.crossings <= before);
}

#[test]
fn test_optimal_input_unchanged() {
    let ordering = ["A", "B", "C", "D"];
    let edges = [("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")];
    let refined = local_search(&ordering, &edges, None).unwrap();
    assert_eq!(refined.ordering, vec!["A", "B", "C", "D"]);
    assert_eq!(refined.crossings, 0);
}

// ── Scoped search ────────────────────────────────────────────────────────

#[test]
fn test_scoped_search_leaves_outside_positions() {
    let ordering = ["A", "B", "C", "D", "E", "F"];
    let edges = [("A", "D"), ("B", "E"), ("C", "F"), ("A", "F")];
    let refined = local_search(&ordering, &edges, Some(1..4)).unwrap();
    assert_eq!(refined.ordering[0], "A");
    assert_eq!(refined.ordering[4], "E");
    assert_eq!(refined.ordering[5], "F");
    assert_eq!(sorted(refined.ordering[1..4].to_vec()), vec!["B", "C", "D"]);
    assert!(refined.crossings <= count_crossings(&ordering, &edges).unwrap());
}

#[test]
fn test_scoped_count_covers_whole_ordering() {
    // The crossing lies outside the scoped range and still counts.
    let ordering = ["A", "B", "C", "D", "E", "F"];
    let edges = [("A", "C"), ("B", "D")];
    let refined = local_search(&ordering, &edges, Some(4..6)).unwrap();
    assert_eq!(refined.crossings, 1);
    assert_eq!(refined.ordering, vec!["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn test_empty_range_is_noop() {
    let refined = local_search(&NODES, &EDGES, Some(2..2)).unwrap();
    assert_eq!(refined.ordering, NODES.to_vec());
    assert_eq!(refined.crossings, 5);
}

#[test]
fn test_range_out_of_bounds() {
    assert!(matches!(
        local_search(&NODES, &EDGES, Some(3..9)),
        Err(Error::InvalidRange { start: 3, end: 9, len: 5 })
    ));
}

// ── Cluster spans ────────────────────────────────────────────────────────

#[test]
fn test_cluster_spans() {
    let g = groups(&[("a", "X"), ("b", "X"), ("c", "Y"), ("d", "Z"), ("e", "Z")]);
    let spans = cluster_spans(&["a", "b", "c", "d", "e"], &g).unwrap();
    assert_eq!(spans, vec![0..2, 2..3, 3..5]);
}

#[test]
fn test_cluster_spans_non_contiguous() {
    let g = groups(&[("a", "X"), ("b", "Y"), ("c", "X")]);
    assert!(matches!(
        cluster_spans(&["a", "b", "c"], &g),
        Err(Error::NonContiguousGroup { ref group }) if group == "X"
    ));
}

#[test]
fn test_cluster_spans_missing_group() {
    let g = groups(&[("a", "X")]);
    assert!(matches!(
        cluster_spans(&["a", "b"], &g),
        Err(Error::MissingGroup { ref node }) if node == "b"
    ));
}

// ── Cluster-scoped search ────────────────────────────────────────────────

#[test]
fn test_clustered_search_keeps_group_spans() {
    let ordering = ["a1", "a2", "a3", "b1", "b2", "b3"];
    let g = groups(&[
        ("a1", "A"),
        ("a2", "A"),
        ("a3", "A"),
        ("b1", "B"),
        ("b2", "B"),
        ("b3", "B"),
    ]);
    let edges = [("a1", "b3"), ("a2", "b2"), ("a3", "b1"), ("a1", "b1")];
    let before = count_crossings(&ordering, &edges).unwrap();
    let refined = local_search_in_clusters(&ordering, &edges, &g).unwrap();

    for (pos, node) in refined.ordering.iter().enumerate() {
        let expected = if pos < 3 { "A" } else { "B" };
        assert_eq!(g[node], expected, "{node} left its group");
    }
    assert!(refined.crossings <= before);
    assert_eq!(
        count_crossings(&refined.ordering, &edges).unwrap(),
        refined.crossings
    );
}

#[test]
fn test_clustered_search_rejects_split_group() {
    let g = groups(&[("a", "X"), ("b", "Y"), ("c", "X")]);
    assert!(matches!(
        local_search_in_clusters(&["a", "b", "c"], &[("a", "c")], &g),
        Err(Error::NonContiguousGroup { .. })
    ));
}
