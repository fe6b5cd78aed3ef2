//! Property-based tests over the algorithm kernels.

#![allow(clippy::expect_used)]

use proptest::prelude::*;
use vignette::alignment::{dtw, edit_distance, similarity_score};
use vignette::sequence::max_subarray;
use vignette::smoothing::ema_series;
use vignette::stats::cosine_similarity;
use vignette::TreeNode;

fn small_tree() -> impl Strategy<Value = Option<TreeNode>> {
    let leaf = prop_oneof![
        Just(None::<TreeNode>),
        "[a-d]".prop_map(|label| Some(TreeNode::leaf(label))),
    ];
    leaf.prop_recursive(3, 16, 2, |inner| {
        ("[a-d]", inner.clone(), inner).prop_map(|(label, left, right)| {
            Some(TreeNode {
                label,
                left: left.map(Box::new),
                right: right.map(Box::new),
            })
        })
    })
}

proptest! {
    #[test]
    fn kadane_at_least_max_element(values in prop::collection::vec(-1000_i64..1000, 1..50)) {
        let best = max_subarray(&values).expect("non-empty input");
        let max_element = *values.iter().max().expect("non-empty");
        prop_assert!(best.sum >= max_element);
        // The reported range really sums to the reported value.
        let actual: i64 = values[best.range.clone()].iter().sum();
        prop_assert_eq!(actual, best.sum);
    }

    #[test]
    fn ema_stays_within_input_bounds(
        values in prop::collection::vec(-1000.0_f64..1000.0, 1..50),
        alpha in 0.01_f64..1.0,
    ) {
        let smoothed = ema_series(&values, alpha).expect("valid input");
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        for v in smoothed {
            prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
        }
    }

    #[test]
    fn dtw_is_zero_on_self_and_symmetric(
        a in prop::collection::vec(-100.0_f64..100.0, 1..20),
        b in prop::collection::vec(-100.0_f64..100.0, 1..20),
    ) {
        let self_distance = dtw(&a, &a).expect("valid input");
        prop_assert!(self_distance.abs() < 1e-9);

        let forward = dtw(&a, &b).expect("valid input");
        let backward = dtw(&b, &a).expect("valid input");
        prop_assert!((forward - backward).abs() < 1e-9);
        prop_assert!(forward >= 0.0);
    }

    #[test]
    fn tree_edit_distance_is_a_symmetric_premetric(
        a in small_tree(),
        b in small_tree(),
    ) {
        let forward = edit_distance(a.as_ref(), b.as_ref());
        let backward = edit_distance(b.as_ref(), a.as_ref());
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(edit_distance(a.as_ref(), a.as_ref()), 0);

        if let (Some(x), Some(y)) = (a.as_ref(), b.as_ref()) {
            let similarity = similarity_score(x, y);
            prop_assert!((0.0..=1.0).contains(&similarity));
        }
    }

    #[test]
    fn cosine_similarity_is_bounded(
        a in prop::collection::vec(-100.0_f64..100.0, 1..20),
    ) {
        let b: Vec<f64> = a.iter().map(|x| x * 0.5 + 1.0).collect();
        let s = cosine_similarity(&a, &b).expect("equal lengths");
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&s));
    }
}
