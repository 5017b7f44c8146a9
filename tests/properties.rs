use monosearch::engine::{find_in_mountain, find_peak, partition_point, search_sorted};
use monosearch::{median, Boundary, Median, Metered, Occurrence, Order, SearchRange};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Strictly increasing values, a peak above all of them, then strictly
/// decreasing values. Both sides are non-empty so the length is at least 3.
fn mountain() -> impl Strategy<Value = Vec<i32>> {
    (
        prop::collection::btree_set(-500i32..500, 1..40),
        prop::collection::btree_set(-500i32..500, 1..40),
    )
        .prop_map(|(up, down)| {
            let peak = up.iter().chain(down.iter()).max().copied().unwrap_or(0) + 1;
            up.into_iter()
                .chain(std::iter::once(peak))
                .chain(down.into_iter().rev())
                .collect()
        })
}

fn sorted(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1_000i32..1_000, 0..max_len).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

fn merged_median(x: &[i32], y: &[i32]) -> Median<i32> {
    let mut all: Vec<i32> = x.iter().chain(y.iter()).copied().collect();
    all.sort_unstable();
    let mid = all.len() / 2;
    if all.len() % 2 == 1 {
        Median::Middle(all[mid])
    } else {
        Median::Between(all[mid - 1], all[mid])
    }
}

// ---------------------------------------------------------------------------
// Mountain
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn mountain_finds_every_present_value(m in mountain()) {
        for &v in &m {
            let found = find_in_mountain(&m, &v).unwrap();
            prop_assert!(
                matches!(found, Some(i) if m[i] == v),
                "value {} in {:?} reported at {:?}", v, m, found
            );
        }
    }

    #[test]
    fn mountain_reports_absent_values_as_none(m in mountain(), target in -600i32..600) {
        prop_assume!(!m.contains(&target));
        prop_assert_eq!(find_in_mountain(&m, &target), Ok(None));
    }

    #[test]
    fn peak_is_the_unique_maximum(m in mountain()) {
        let expected = m
            .iter()
            .enumerate()
            .max_by_key(|&(_, v)| *v)
            .map(|(i, _)| i)
            .unwrap();

        prop_assert_eq!(find_peak(&m), Ok(expected));
        prop_assert_eq!(find_peak(&m), find_peak(&m));
    }

    #[test]
    fn mountain_probes_stay_logarithmic(m in mountain(), target in -600i32..600) {
        let metered = Metered::new(&m);
        let _ = find_in_mountain(&metered, &target).unwrap();

        let depth = (usize::BITS - m.len().leading_zeros()) as usize;
        prop_assert!(metered.probes() <= 4 * depth, "{} probes for len {}", metered.probes(), m.len());
    }
}

// ---------------------------------------------------------------------------
// Median
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn median_matches_merge_and_sort(x in sorted(40), y in sorted(40)) {
        prop_assume!(!x.is_empty() || !y.is_empty());
        prop_assert_eq!(median(&x, &y), Ok(merged_median(&x, &y)));
    }

    #[test]
    fn median_parity(x in sorted(40), y in sorted(40)) {
        prop_assume!(!x.is_empty() || !y.is_empty());

        match median(&x, &y).unwrap() {
            Median::Middle(v) => {
                prop_assert_eq!((x.len() + y.len()) % 2, 1);
                prop_assert!(x.contains(&v) || y.contains(&v));
            }
            Median::Between(lo, hi) => {
                prop_assert_eq!((x.len() + y.len()) % 2, 0);
                prop_assert!(lo <= hi);
            }
        }
    }

    #[test]
    fn median_is_symmetric(x in sorted(30), y in sorted(30)) {
        prop_assume!(!x.is_empty() || !y.is_empty());
        prop_assert_eq!(median(&x, &y), median(&y, &x));
    }
}

// ---------------------------------------------------------------------------
// Sorted and boundary
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn first_and_last_occurrence_match_linear_scan(
        v in prop::collection::vec(0i32..20, 0..60).prop_map(|mut v| { v.sort_unstable(); v }),
        target in 0i32..21,
    ) {
        let full = SearchRange::full(v.len());

        let first = search_sorted(&v, &target, full, Order::Ascending, Occurrence::First).unwrap();
        let last = search_sorted(&v, &target, full, Order::Ascending, Occurrence::Last).unwrap();
        let any = search_sorted(&v, &target, full, Order::Ascending, Occurrence::Any).unwrap();

        prop_assert_eq!(first, v.iter().position(|&x| x == target));
        prop_assert_eq!(last, v.iter().rposition(|&x| x == target));
        prop_assert_eq!(any.is_some(), v.contains(&target));
        if let Some(i) = any {
            prop_assert_eq!(v[i], target);
        }
    }

    #[test]
    fn descending_search_matches_linear_scan(
        v in prop::collection::vec(0i32..20, 0..60).prop_map(|mut v| { v.sort_unstable_by(|a, b| b.cmp(a)); v }),
        target in 0i32..21,
    ) {
        let full = SearchRange::full(v.len());

        let first = search_sorted(&v, &target, full, Order::Descending, Occurrence::First).unwrap();
        let last = search_sorted(&v, &target, full, Order::Descending, Occurrence::Last).unwrap();

        prop_assert_eq!(first, v.iter().position(|&x| x == target));
        prop_assert_eq!(last, v.iter().rposition(|&x| x == target));
    }

    #[test]
    fn boundary_matches_linear_scan(low in 0usize..100, width in 0usize..100, threshold in 0usize..220) {
        let high = low + width;
        let range = SearchRange::new(low, high);
        let rising = |i: usize| i >= threshold;
        let falling = |i: usize| i < threshold;

        prop_assert_eq!(
            partition_point(range, &rising, Boundary::FirstTrue),
            (low..=high).find(|&i| rising(i))
        );
        prop_assert_eq!(
            partition_point(range, &rising, Boundary::LastFalse),
            (low..=high).rev().find(|&i| !rising(i))
        );
        prop_assert_eq!(
            partition_point(range, &falling, Boundary::LastTrue),
            (low..=high).rev().find(|&i| falling(i))
        );
        prop_assert_eq!(
            partition_point(range, &falling, Boundary::FirstFalse),
            (low..=high).find(|&i| !falling(i))
        );
    }

    #[test]
    fn searches_are_idempotent(m in mountain(), x in sorted(20), y in sorted(20), target in -600i32..600) {
        prop_assert_eq!(find_in_mountain(&m, &target), find_in_mountain(&m, &target));
        prop_assert_eq!(median(&x, &y), median(&x, &y));

        let full = SearchRange::full(x.len());
        prop_assert_eq!(
            search_sorted(&x, &target, full, Order::Ascending, Occurrence::Any),
            search_sorted(&x, &target, full, Order::Ascending, Occurrence::Any)
        );
    }
}
