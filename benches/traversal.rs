mod common;

use common::{algraph_random, petgraph_random, RANDOM_SEED};
use fastrand::Rng;
use petgraph::{
    graph::NodeIndex,
    visit::{Bfs, Dfs},
};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000, 5000], args = [0.01, 0.1])]
fn algraph_depth_first_search<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = algraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| algraph::algo::DepthFirstSearch::on(&graph).run(0));
}

#[divan::bench(consts = [100, 1000, 5000], args = [0.01, 0.1])]
fn petgraph_depth_first_search<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        let mut dfs = Dfs::new(&graph, NodeIndex::new(0));
        let mut count = 0;
        while dfs.next(&graph).is_some() {
            count += 1;
        }
        count
    });
}

#[divan::bench(consts = [100, 1000, 5000], args = [0.01, 0.1])]
fn algraph_breadth_first_paths<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = algraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| algraph::algo::BreadthFirstPaths::on(&graph).run(0));
}

#[divan::bench(consts = [100, 1000, 5000], args = [0.01, 0.1])]
fn petgraph_breadth_first_paths<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        let mut bfs = Bfs::new(&graph, NodeIndex::new(0));
        let mut count = 0;
        while bfs.next(&graph).is_some() {
            count += 1;
        }
        count
    });
}

#[divan::bench(consts = [100, 1000, 5000], args = [0.001, 0.01])]
fn algraph_connected_components<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = algraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| algraph::algo::ConnectedComponents::on(&graph).run().count());
}

#[divan::bench(consts = [100, 1000, 5000], args = [0.001, 0.01])]
fn petgraph_connected_components<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::connected_components(&graph));
}

#[divan::bench(consts = [100, 1000, 5000], args = [0.001, 0.01])]
fn algraph_is_cyclic<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = algraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| algraph::algo::is_cyclic(&graph));
}

#[divan::bench(consts = [100, 1000, 5000], args = [0.001, 0.01])]
fn petgraph_is_cyclic<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::is_cyclic_undirected(&graph));
}

#[divan::bench(consts = [100, 1000, 5000])]
fn algraph_bipartite<const N: usize>(bencher: divan::Bencher) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = algraph::generate::complete_bipartite(N / 2, N - N / 2, &mut rng);

    bencher.bench(|| algraph::algo::Bipartite::on(&graph).run().is_bipartite());
}

#[divan::bench(consts = [100, 1000, 5000])]
fn algraph_bipartite_bfs<const N: usize>(bencher: divan::Bencher) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = algraph::generate::complete_bipartite(N / 2, N - N / 2, &mut rng);

    bencher.bench(|| {
        algraph::algo::Bipartite::on(&graph)
            .bfs()
            .run()
            .is_bipartite()
    });
}

#[divan::bench(consts = [100, 1000, 5000])]
fn petgraph_bipartite<const N: usize>(bencher: divan::Bencher) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let source = algraph::generate::complete_bipartite(N / 2, N - N / 2, &mut rng);

    let mut graph = petgraph::graph::UnGraph::<(), ()>::with_capacity(N, source.edge_count());
    for _ in 0..N {
        graph.add_node(());
    }
    for (u, v) in source.edges() {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    bencher.bench(|| petgraph::algo::is_bipartite_undirected(&graph, NodeIndex::new(0)));
}
