use partite_extract::get_2_partite;
use partite_graph::{ImplicitHypergraph, PermutationHypergraph};

// 0.9 · C(400, 2) edges
fn dense_graph(seed: u64) -> PermutationHypergraph {
    PermutationHypergraph::with_seed(400, 2, 71_820u32, seed).unwrap()
}

#[test]
fn dense_graph_yields_complete_bipartite_pair() {
    let graph = dense_graph(1234);
    let witness = get_2_partite(&graph).unwrap();
    let params = witness.parameters;
    assert_eq!((params.q, params.r, params.s), (2, 9, 80));
    assert_eq!(witness.left.len(), params.q);
    assert_eq!(witness.right.len(), params.q);
    assert!(witness.right.windows(2).all(|pair| pair[0] < pair[1]));
    for &a in &witness.left {
        assert!(!witness.right.contains(&a));
        for &b in &witness.right {
            assert!(graph.is_edge(&[a, b]), "missing edge {a} {b}");
        }
    }
}

#[test]
fn same_seed_same_pair() {
    assert_eq!(
        get_2_partite(&dense_graph(11)).unwrap(),
        get_2_partite(&dense_graph(11)).unwrap()
    );
}
