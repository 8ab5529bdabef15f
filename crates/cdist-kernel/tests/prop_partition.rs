use proptest::prelude::*;

use cdist_kernel::index::{decode, encode};
use cdist_kernel::partition::{cell_cost, split};

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn prop_split_covers_grid_exactly_once(
        ma in 0usize..64,
        mb in 0usize..64,
        workers in 0usize..33,
        n in 0usize..512,
        min_task_cost in prop_oneof![Just(0u64), Just(1u64), 2u64..100_000],
    ) {
        let total = ma * mb;
        let ranges = split(total, workers, cell_cost(n), min_task_cost);

        if total == 0 {
            prop_assert!(ranges.is_empty());
            return Ok(());
        }
        prop_assert!(!ranges.is_empty());
        prop_assert!(ranges.len() <= workers.max(1));
        prop_assert!(ranges.len() <= total);

        let mut seen = vec![0u8; total];
        for r in &ranges {
            prop_assert!(r.start < r.end);
            for cell in r.clone() {
                seen[cell] += 1;
            }
        }
        prop_assert!(seen.iter().all(|&c| c == 1));

        let lens: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
        let min = *lens.iter().min().unwrap();
        let max = *lens.iter().max().unwrap();
        prop_assert!(max - min <= 1);
    }

    #[test]
    fn prop_range_endpoints_decode_inside_grid(
        ma in 1usize..50,
        mb in 1usize..50,
        workers in 1usize..17,
    ) {
        for r in split(ma * mb, workers, 1, 0) {
            let first = decode(r.start, mb);
            let last = decode(r.end, mb);
            prop_assert!(first.row < ma);
            prop_assert!(first <= last);
            prop_assert!(last.row < ma || (last.row == ma && last.col == 0));
            prop_assert_eq!(encode(first, mb), r.start);
            prop_assert_eq!(encode(last, mb), r.end);
        }
    }
}
