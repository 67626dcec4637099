use partite_core::ProgressConfig;
use partite_extract::{get_partite, ExtractionConfig, PartiteExtractor, WitnessChain};
use partite_graph::{ImplicitHypergraph, ModularHypergraph, PermutationHypergraph};

// 0.97 · C(180, 3) edges
const DENSE_TRIPLES: u64 = 927_184;

fn dense_triples(seed: u64) -> PermutationHypergraph {
    PermutationHypergraph::with_seed(180, 3, DENSE_TRIPLES, seed).unwrap()
}

fn assert_disjoint(chain: &WitnessChain) {
    let mut all: Vec<u64> = chain.parts().flatten().copied().collect();
    let total = all.len();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), total, "parts overlap: {chain:?}");
}

#[test]
fn three_uniform_chain_is_complete_tripartite() {
    let graph = dense_triples(1234);
    let chain = get_partite(&graph, None, Some(2)).unwrap();

    assert_eq!(chain.depth(), 2);
    assert!(chain.witnesses.iter().all(|set| set.len() == 2));
    assert_eq!(chain.leaf.len(), 2);
    assert_eq!(chain.levels.len(), 3);
    assert_disjoint(&chain);
    assert!(chain.verify(&graph).unwrap());

    for &a in &chain.witnesses[0] {
        for &b in &chain.witnesses[1] {
            for &c in &chain.leaf {
                assert!(graph.is_edge(&[a, b, c]), "missing edge {a} {b} {c}");
            }
        }
    }
}

#[test]
fn level_reports_follow_the_derivation() {
    let graph = dense_triples(7);
    let chain = get_partite(&graph, None, Some(2)).unwrap();
    let top = &chain.levels[0].parameters;
    assert_eq!(top.arity, 3);
    assert_eq!(top.pool_size, 26);
    assert_eq!(top.min_edges, DENSE_TRIPLES as f64);

    let second = &chain.levels[1].parameters;
    assert_eq!(second.arity, 2);
    assert_eq!(second.min_edges, top.min_link_edges);
    assert_eq!(second.witness_size, 2);
    assert_eq!(second.pool_size, 159);

    let leaf = &chain.levels[2];
    assert_eq!(leaf.parameters.arity, 1);
    assert_eq!(leaf.subsets_tried, 0);
    assert!(chain.levels.iter().take(2).all(|level| level.subsets_tried >= 1));
}

#[test]
fn graph_witness_size_is_derived_from_density() {
    // 0.9 · C(200, 2) edges
    let graph = PermutationHypergraph::with_seed(200, 2, 17_910u32, 99).unwrap();
    let chain = get_partite(&graph, None, None).unwrap();
    assert_eq!(chain.depth(), 1);
    assert_eq!(chain.witnesses[0].len(), 2);
    assert_eq!(chain.leaf.len(), 2);
    assert_eq!(chain.levels[0].parameters.pool_size, 9);
    assert!(chain.verify(&graph).unwrap());
    for &a in &chain.witnesses[0] {
        for &b in &chain.leaf {
            assert!(graph.is_edge(&[a, b]));
        }
    }
}

#[test]
fn extraction_is_deterministic() {
    let config = ExtractionConfig::default()
        .with_witness_size(2)
        .with_progress(ProgressConfig::silent());
    let first = PartiteExtractor::new(config.clone())
        .extract(&dense_triples(42))
        .unwrap();
    let second = PartiteExtractor::new(config)
        .extract(&dense_triples(42))
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(first.digest(), second.digest());
}

#[test]
fn chain_survives_json() {
    let graph = PermutationHypergraph::with_seed(200, 2, 17_910u32, 3).unwrap();
    let chain = get_partite(&graph, None, None).unwrap();
    let decoded = WitnessChain::from_json(&chain.to_json().unwrap()).unwrap();
    assert_eq!(decoded, chain);
    assert!(decoded.verify(&graph).unwrap());
}

#[test]
fn config_from_json_drives_the_extractor() {
    let graph = ModularHypergraph::new(10, 1, 2).unwrap();
    let config = ExtractionConfig::from_json(r#"{"witness_size": 3}"#).unwrap();
    let chain = PartiteExtractor::new(config).extract(&graph).unwrap();
    assert_eq!(chain.leaf, vec![0, 2, 4]);
    assert!(chain.verify(&graph).unwrap());
}

#[test]
fn tampered_chain_fails_verification() {
    let graph = PermutationHypergraph::with_seed(200, 2, 17_910u32, 5).unwrap();
    let mut chain = get_partite(&graph, None, None).unwrap();
    // a witness vertex never lies in its own common link
    chain.leaf[0] = chain.witnesses[0][0];
    assert!(!chain.verify(&graph).unwrap());
}

#[test]
#[ignore = "scans C(999, 2) co-edges per degree; run with --ignored --release"]
fn thousand_vertex_chain_is_complete_tripartite() {
    // 0.97 · C(1000, 3) edges
    let capacity = partite_core::binomial(1_000, 3);
    let target = &capacity * 97u32 / 100u32;
    let graph = PermutationHypergraph::with_seed(1_000, 3, target, 1234).unwrap();
    let chain = get_partite(&graph, None, Some(2)).unwrap();
    assert_eq!(chain.depth(), 2);
    assert_eq!(chain.leaf.len(), 2);
    assert_disjoint(&chain);
    assert!(chain.verify(&graph).unwrap());
}
