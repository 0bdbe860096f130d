#![no_main]

use libfuzzer_sys::fuzz_target;

use algraph::{
    infra::arbitrary::UnionFindOpsSeq,
    union_find::{QuickFind, QuickUnion, UnionFind, WeightedQuickUnion},
};

fuzz_target!(|seq: UnionFindOpsSeq| {
    let mut quick_find = QuickFind::new(seq.len);
    let mut quick_union = QuickUnion::new(seq.len);
    let mut weighted = WeightedQuickUnion::new(seq.len);

    for op in seq.ops {
        let results = [
            (op.apply(&mut quick_find), "QuickFind"),
            (op.apply(&mut quick_union), "QuickUnion"),
            (op.apply(&mut weighted), "WeightedQuickUnion"),
        ];

        if results.iter().any(|(result, _)| *result != results[0].0) {
            let mut report = format!("union-find variants disagree on {op:?}:");

            for (result, label) in results {
                report.push_str(format!("\n  {label}: {result:?}").as_str());
            }

            panic!("{report}");
        }

        for i in 0..weighted.len() {
            // Representatives differ between variants, but must be stable.
            let root = weighted.find(i).unwrap();
            assert_eq!(weighted.find(i), Ok(root));
            assert_eq!(weighted.find(root), Ok(root));
        }
    }
});
