#![no_main]

use libfuzzer_sys::fuzz_target;

use algraph::infra::{arbitrary::ArbitraryGraph, testing::check_consistency};

fuzz_target!(|graph: ArbitraryGraph| {
    check_consistency(&graph.0)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
});
