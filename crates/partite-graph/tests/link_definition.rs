use partite_graph::{CommonLink, ImplicitHypergraph, OracleHypergraph, PermutationHypergraph};
use proptest::prelude::*;

const DOMAIN: u64 = 12;

fn pairs() -> impl Iterator<Item = [u64; 2]> {
    (0..DOMAIN).flat_map(|a| (a + 1..DOMAIN).map(move |b| [a, b]))
}

proptest! {
    #[test]
    fn singleton_link_matches_parent(seed in any::<u64>(), pivot in 0..DOMAIN) {
        let graph = OracleHypergraph::with_seed(DOMAIN, 3, 0.6, seed).unwrap();
        let link = CommonLink::new(&graph, &[pivot]).unwrap();
        for pair in pairs() {
            if pair.contains(&pivot) {
                prop_assert!(!link.is_edge(&pair));
                continue;
            }
            prop_assert_eq!(
                link.is_edge(&pair),
                graph.is_edge(&[pair[0], pair[1], pivot])
            );
        }
    }

    #[test]
    fn multi_pivot_link_is_conjunction(
        seed in any::<u64>(),
        pivots in proptest::collection::btree_set(0..DOMAIN, 1..4),
    ) {
        let graph = PermutationHypergraph::with_seed(DOMAIN, 3, 150u32, seed).unwrap();
        let pivots: Vec<u64> = pivots.into_iter().collect();
        let link = CommonLink::new(&graph, &pivots).unwrap();
        for pair in pairs() {
            if pivots.iter().any(|p| pair.contains(p)) {
                prop_assert!(!link.is_edge(&pair));
                continue;
            }
            let expected = pivots
                .iter()
                .all(|v| graph.is_edge(&[pair[0], pair[1], *v]));
            prop_assert_eq!(link.is_edge(&pair), expected);
        }
    }
}

#[test]
fn nested_links_drop_one_arity_each() {
    let graph = PermutationHypergraph::with_seed(DOMAIN, 3, 200u32, 11).unwrap();
    let first = CommonLink::new(&graph, &[0, 1]).unwrap();
    let second = CommonLink::new(&first, &[2, 3]).unwrap();
    assert_eq!(first.arity(), 2);
    assert_eq!(second.arity(), 1);
    for x in 4..DOMAIN {
        let expected = [0u64, 1]
            .iter()
            .all(|u| [2u64, 3].iter().all(|v| graph.is_edge(&[*u, *v, x])));
        assert_eq!(second.is_edge(&[x]), expected, "x={x}");
    }
}

#[test]
fn link_degrees_are_memoized_per_instance() {
    let graph = OracleHypergraph::with_seed(DOMAIN, 3, 0.5, 3).unwrap();
    let a = CommonLink::new(&graph, &[5]).unwrap();
    let b = CommonLink::new(&graph, &[6]).unwrap();
    let degree = a.degree(0);
    assert_eq!(a.degree(0), degree);
    assert_eq!(a.degree_cache().get(0), Some(degree));
    assert_eq!(b.degree_cache().get(0), None);
    assert!(graph.degree_cache().is_empty());
}
