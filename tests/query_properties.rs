#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use porenet::operations::query::{
    ConnectedPores, FindConnectedPores, FindNeighborPores, FindNeighborThroats, Mode, Neighbors,
    NumNeighbors,
};
use porenet::topology::TopologyStore;

/// A random network together with a pore selection and a throat selection.
fn network_and_selections() -> impl Strategy<Value = (TopologyStore, Vec<usize>, Vec<usize>)> {
    (1usize..30).prop_flat_map(|np| {
        (
            prop::collection::vec((0..np, 0..np), 0..60),
            prop::collection::vec(0..np, 0..8),
            prop::collection::vec(any::<usize>(), 0..8),
        )
            .prop_map(move |(pairs, pores, raw_throats)| {
                let conns: Vec<[usize; 2]> = pairs.into_iter().map(|(a, b)| [a, b]).collect();
                let nt = conns.len();
                let throats = if nt == 0 {
                    Vec::new()
                } else {
                    raw_throats.into_iter().map(|t| t % nt).collect()
                };
                (TopologyStore::new(np, conns).unwrap(), pores, throats)
            })
    })
}

fn to_mask(len: usize, selected: &[usize]) -> Vec<bool> {
    let mut mask = vec![false; len];
    for &i in selected {
        mask[i] = true;
    }
    mask
}

fn distinct(indices: &[usize]) -> usize {
    let mut v = indices.to_vec();
    v.sort_unstable();
    v.dedup();
    v.len()
}

fn pores_by_mode(net: &TopologyStore, pores: &[usize], mode: Mode, excl_self: bool) -> Vec<usize> {
    match FindNeighborPores::new(pores)
        .with_mode(mode)
        .with_excl_self(excl_self)
        .execute(net)
        .unwrap()
    {
        Neighbors::Flat(v) => v,
        Neighbors::PerElement(_) => unreachable!("flattened query"),
    }
}

fn throats_by_mode(net: &TopologyStore, pores: &[usize], mode: Mode) -> Vec<usize> {
    FindNeighborThroats::new(pores)
        .with_mode(mode)
        .execute(net)
        .unwrap()
        .as_flat()
        .unwrap()
        .to_vec()
}

fn is_sorted_unique(v: &[usize]) -> bool {
    v.windows(2).all(|w| w[0] < w[1])
}

fn merge(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out: Vec<usize> = a.iter().chain(b).copied().collect();
    out.sort_unstable();
    out.dedup();
    out
}

proptest! {
    #[test]
    fn flat_connected_pores_merge_pairs((net, _pores, throats) in network_and_selections()) {
        let pairs = FindConnectedPores::new(&throats).execute(&net).unwrap();
        let flat = FindConnectedPores::new(&throats).with_flatten(true).execute(&net).unwrap();
        let mut expected: Vec<usize> =
            pairs.as_pairs().unwrap().iter().flatten().copied().collect();
        expected.sort_unstable();
        expected.dedup();
        match flat {
            ConnectedPores::Flat(pores) => prop_assert_eq!(pores, expected),
            ConnectedPores::Pairs(p) => {
                prop_assert!(throats.is_empty());
                prop_assert!(p.is_empty());
            }
        }
    }

    #[test]
    fn union_contains_intersection(
        (net, pores, _t) in network_and_selections(),
        excl_self in any::<bool>(),
    ) {
        let union = pores_by_mode(&net, &pores, Mode::Union, excl_self);
        let inter = pores_by_mode(&net, &pores, Mode::Intersection, excl_self);
        prop_assert!(is_sorted_unique(&union));
        prop_assert!(inter.iter().all(|p| union.binary_search(p).is_ok()));
    }

    #[test]
    fn pore_modes_partition_union(
        (net, pores, _t) in network_and_selections(),
        excl_self in any::<bool>(),
    ) {
        let union = pores_by_mode(&net, &pores, Mode::Union, excl_self);
        let inter = pores_by_mode(&net, &pores, Mode::Intersection, excl_self);
        let not_inter = pores_by_mode(&net, &pores, Mode::NotIntersection, excl_self);
        let both = merge(&inter, &not_inter);
        if distinct(&pores) >= 2 {
            prop_assert!(inter.iter().all(|p| not_inter.binary_search(p).is_err()));
        }
        prop_assert_eq!(both, union);
    }

    #[test]
    fn throat_modes_partition_union((net, pores, _t) in network_and_selections()) {
        let union = throats_by_mode(&net, &pores, Mode::Union);
        let inter = throats_by_mode(&net, &pores, Mode::Intersection);
        let not_inter = throats_by_mode(&net, &pores, Mode::NotIntersection);
        prop_assert!(is_sorted_unique(&union));
        let both = merge(&inter, &not_inter);
        if distinct(&pores) >= 2 {
            prop_assert!(inter.iter().all(|t| not_inter.binary_search(t).is_err()));
        }
        prop_assert_eq!(both, union);
    }

    #[test]
    fn mask_and_indices_agree(
        (net, pores, throats) in network_and_selections(),
        excl_self in any::<bool>(),
    ) {
        let pore_mask = to_mask(net.num_pores(), &pores);
        let throat_mask = to_mask(net.num_throats(), &throats);
        for mode in [Mode::Union, Mode::Intersection, Mode::NotIntersection] {
            prop_assert_eq!(
                pores_by_mode(&net, &pores, mode, excl_self),
                FindNeighborPores::new(&pore_mask)
                    .with_mode(mode)
                    .with_excl_self(excl_self)
                    .execute(&net)
                    .unwrap()
                    .as_flat()
                    .unwrap()
                    .to_vec()
            );
            prop_assert_eq!(
                throats_by_mode(&net, &pores, mode),
                FindNeighborThroats::new(&pore_mask)
                    .with_mode(mode)
                    .execute(&net)
                    .unwrap()
                    .as_flat()
                    .unwrap()
                    .to_vec()
            );
        }
        prop_assert_eq!(
            FindConnectedPores::new(&throats).with_flatten(true).execute(&net).unwrap(),
            FindConnectedPores::new(&throat_mask).with_flatten(true).execute(&net).unwrap()
        );
    }

    #[test]
    fn flat_count_matches_neighbor_pores((net, pores, _t) in network_and_selections()) {
        prop_assume!(!pores.is_empty());
        let count = NumNeighbors::new(&pores).execute(&net).unwrap();
        let neighbors = pores_by_mode(&net, &pores, Mode::Union, true);
        prop_assert_eq!(count.total(), Some(neighbors.len()));
    }

    #[test]
    fn queries_are_idempotent((net, pores, throats) in network_and_selections()) {
        let a = FindNeighborPores::new(&pores).with_flatten(false).execute(&net).unwrap();
        let b = FindNeighborPores::new(&pores).with_flatten(false).execute(&net).unwrap();
        prop_assert_eq!(a, b);
        let a = FindConnectedPores::new(&throats).execute(&net).unwrap();
        let b = FindConnectedPores::new(&throats).execute(&net).unwrap();
        prop_assert_eq!(a, b);
    }
}
