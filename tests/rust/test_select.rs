use super::*;
use crate::crossing::count_crossings;
use crate::error::Error;

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

// ── Strategy ─────────────────────────────────────────────────────────────

#[test]
fn test_strategy_from_str() {
    assert_eq!("original".parse::<Strategy>().unwrap(), Strategy::Original);
    assert_eq!("none".parse::<Strategy>().unwrap(), Strategy::Original);
    assert_eq!("AVSDF".parse::<Strategy>().unwrap(), Strategy::Avsdf);
    assert_eq!("local-adjusting".parse::<Strategy>().unwrap(), Strategy::LocalAdjusting);
    assert_eq!("local_adjusting".parse::<Strategy>().unwrap(), Strategy::LocalAdjusting);
    assert_eq!("la".parse::<Strategy>().unwrap(), Strategy::LocalAdjusting);
}

#[test]
fn test_strategy_from_str_unknown() {
    let err = "spectral".parse::<Strategy>().unwrap_err();
    assert!(err.contains("spectral"));
}

#[test]
fn test_strategy_display_round_trips() {
    for strategy in [Strategy::Original, Strategy::Avsdf, Strategy::LocalAdjusting] {
        assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
    }
}

// ── Selection ────────────────────────────────────────────────────────────

#[test]
fn test_five_node_scenario_picks_avsdf() {
    let selection = select_best(&NODES, &EDGES).unwrap();
    assert_eq!(selection.original_crossings, 5);
    assert_eq!(selection.crossings, 0);
    assert_eq!(selection.strategy, Strategy::Avsdf);
    assert_eq!(selection.ordering, vec!["Diego", "Mei", "Amina", "Liam", "Zanele"]);
}

#[test]
fn test_optimal_input_is_kept() {
    // AVSDF and local adjusting both reach 0 too; the tie keeps the input.
    let nodes = ["A", "B", "C", "D"];
    let edges = [("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")];
    let selection = select_best(&nodes, &edges).unwrap();
    assert_eq!(selection.strategy, Strategy::Original);
    assert_eq!(selection.ordering, vec!["A", "B", "C", "D"]);
    assert_eq!(selection.crossings, 0);
    assert_eq!(selection.original_crossings, 0);
}

#[test]
fn test_single_crossing_picks_avsdf_over_local_adjusting() {
    // Both reach 0; AVSDF is scored first and the later tie is ignored.
    let selection = select_best(&["A", "B", "C", "D"], &[("A", "C"), ("B", "D")]).unwrap();
    assert_eq!(selection.original_crossings, 1);
    assert_eq!(selection.crossings, 0);
    assert_eq!(selection.strategy, Strategy::Avsdf);
    assert_eq!(selection.ordering, vec!["A", "C", "B", "D"]);
}

#[test]
fn test_selection_never_worse_than_input() {
    let nodes = ["a", "b", "c", "d", "e", "f"];
    let edges = [
        ("a", "d"),
        ("b", "e"),
        ("c", "f"),
        ("a", "c"),
        ("b", "f"),
        ("d", "f"),
    ];
    let selection = select_best(&nodes, &edges).unwrap();
    assert!(selection.crossings <= selection.original_crossings);
    assert_eq!(
        count_crossings(&selection.ordering, &edges).unwrap(),
        selection.crossings
    );
}

#[test]
fn test_selection_unknown_endpoint() {
    assert!(matches!(
        select_best(&["A"], &[("A", "B")]),
        Err(Error::NodeNotFound { .. })
    ));
}

// ── Single strategies ────────────────────────────────────────────────────

#[test]
fn test_run_strategy_original_is_identity() {
    let graph = ArcGraph::new(&NODES, &EDGES).unwrap();
    let perm = vec![4, 3, 2, 1, 0];
    let (out, crossings) = run_strategy(Strategy::Original, &graph, &perm, &graph.edge_ids()).unwrap();
    assert_eq!(out, perm);
    assert_eq!(
        crossings,
        count_crossings(&["Zanele", "Mei", "Liam", "Diego", "Amina"], &EDGES).unwrap()
    );
}

#[test]
fn test_best_candidate_reports_original_count() {
    let graph = ArcGraph::new(&NODES, &EDGES).unwrap();
    let (best, original) = best_candidate(&graph, &graph.edge_ids()).unwrap();
    assert_eq!(original, 5);
    assert_eq!(best.strategy, Strategy::Avsdf);
    assert_eq!(best.perm, vec![1, 3, 0, 2, 4]);
}
