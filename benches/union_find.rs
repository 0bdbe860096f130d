mod common;

use algraph::union_find::{QuickFind, QuickUnion, UnionFind, WeightedQuickUnion};
use common::{random_pairs, RANDOM_SEED};
use fastrand::Rng;

fn main() {
    divan::main();
}

fn run<U: UnionFind>(len: usize, pairs: &[(usize, usize)]) -> usize {
    let mut uf = U::with_len(len);

    for &(a, b) in pairs {
        if !uf.connected(a, b).unwrap() {
            uf.union(a, b).unwrap();
        }
    }

    uf.count()
}

#[divan::bench(consts = [100, 1000, 10000])]
fn algraph_quick_find<const N: usize>(bencher: divan::Bencher) {
    let pairs = random_pairs(N, N, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| run::<QuickFind>(N, &pairs));
}

#[divan::bench(consts = [100, 1000, 10000])]
fn algraph_quick_union<const N: usize>(bencher: divan::Bencher) {
    let pairs = random_pairs(N, N, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| run::<QuickUnion>(N, &pairs));
}

#[divan::bench(consts = [100, 1000, 10000])]
fn algraph_weighted_quick_union<const N: usize>(bencher: divan::Bencher) {
    let pairs = random_pairs(N, N, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| run::<WeightedQuickUnion>(N, &pairs));
}

#[divan::bench(consts = [100, 1000, 10000])]
fn petgraph_union_find<const N: usize>(bencher: divan::Bencher) {
    let pairs = random_pairs(N, N, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        let mut uf = petgraph::unionfind::UnionFind::<usize>::new(N);
        let mut count = N;

        for &(a, b) in &pairs {
            if uf.union(a, b) {
                count -= 1;
            }
        }

        count
    });
}
