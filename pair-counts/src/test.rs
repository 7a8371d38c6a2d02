use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use test_log::test;

use crate::{
    classify_pairs, classify_pairs_by, classify_pairs_with_settings, ClassifySettings,
    ExactComparator, PairCountError, PairCounts, SettingsError, ToleranceComparator,
};

fn counts(concordant: usize, discordant: usize, ties: usize, left: usize, right: usize) -> PairCounts {
    PairCounts {
        concordant,
        discordant,
        ties,
        left,
        right,
    }
}

/// Small alphabet so ties show up often.
fn random_sequence(rng: &mut ChaCha8Rng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-3..=3) as f64).collect()
}

#[test]
fn identical_sequences() {
    let c = classify_pairs(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(c, counts(3, 0, 0, 0, 0));
}

#[test]
fn reversed_sequences() {
    let c = classify_pairs(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
    assert_eq!(c, counts(0, 3, 0, 0, 0));
}

#[test]
fn full_ties() {
    let c = classify_pairs(&[1.0, 1.0, 2.0], &[1.0, 1.0, 2.0]).unwrap();
    assert_eq!(c, counts(2, 0, 1, 0, 0));
}

#[test]
fn partial_ties() {
    let c = classify_pairs(&[1.0, 1.0, 2.0], &[1.0, 2.0, 2.0]).unwrap();
    assert_eq!(c, counts(1, 0, 0, 1, 1));
}

#[test]
fn unequal_lengths() {
    let result = classify_pairs(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
    assert_eq!(
        result,
        Err(PairCountError::InvalidInput { x_len: 3, y_len: 2 })
    );

    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid input: sequences have unequal lengths (3 and 2)"
    );
}

#[test]
fn empty_and_single() {
    let empty: [f64; 0] = [];
    assert_eq!(classify_pairs(&empty, &empty).unwrap(), PairCounts::new());
    assert_eq!(classify_pairs(&[4.2], &[-1.0]).unwrap(), PairCounts::new());
}

#[test]
fn mixed_value_types() {
    let ranks = [1u32, 2, 3, 4, 5];
    let scores = [0.3, 0.9, 0.1, 0.2, 1.5];
    let c = classify_pairs(&ranks, &scores).unwrap();
    assert_eq!(c, counts(6, 4, 0, 0, 0));
    assert_eq!(c.kendall_tau_distance(), 4);
}

#[test]
fn exact_comparison_keeps_rounding_differences() {
    let x = [0.1 + 0.2, 0.3];
    let y = [1.0, 1.0];
    assert_eq!(classify_pairs(&x, &y).unwrap(), counts(0, 0, 0, 0, 1));
    // x differs (0.30000000000000004 > 0.3), y is tied.
    assert_eq!(classify_pairs(&y, &x).unwrap(), counts(0, 0, 0, 1, 0));
}

#[test]
fn tolerance_ties_close_values() {
    let x = [0.1 + 0.2, 0.3, 0.5];
    let y = [1.0, 1.0, 2.0];

    let exact = classify_pairs_with_settings(&x, &y, &ClassifySettings::default()).unwrap();
    assert_eq!(exact, counts(2, 0, 0, 0, 1));

    let tolerant = ClassifySettings {
        tolerance: 1e-9,
        ..Default::default()
    };
    let c = classify_pairs_with_settings(&x, &y, &tolerant).unwrap();
    assert_eq!(c, counts(2, 0, 1, 0, 0));
}

#[test]
fn invalid_settings_are_rejected_before_lengths() {
    let settings = ClassifySettings {
        tolerance: -0.5,
        ..Default::default()
    };
    let result = classify_pairs_with_settings(&[1.0], &[1.0, 2.0], &settings);
    assert_eq!(
        result,
        Err(PairCountError::InvalidSettings(
            SettingsError::NegativeTolerance(-0.5)
        ))
    );
}

#[test]
fn nan_follows_branch_order() {
    // (0, 1): x unordered -> right
    // (0, 2): x unordered -> right
    // (1, 2): x tied, y unordered -> left
    let x = [f64::NAN, 1.0, 1.0];
    let y = [0.0, 2.0, f64::NAN];
    assert_eq!(classify_pairs(&x, &y).unwrap(), counts(0, 0, 0, 1, 2));
}

#[test]
fn counts_cover_every_pair() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for n in 0..40 {
        let x = random_sequence(&mut rng, n);
        let y = random_sequence(&mut rng, n);
        let c = classify_pairs(&x, &y).unwrap();
        assert_eq!(c.total(), n * n.saturating_sub(1) / 2, "n = {}", n);
    }
}

#[test]
fn swapping_sequences_swaps_partial_ties() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for n in [2, 5, 13, 50] {
        let x = random_sequence(&mut rng, n);
        let y = random_sequence(&mut rng, n);
        let xy = classify_pairs(&x, &y).unwrap();
        let yx = classify_pairs(&y, &x).unwrap();
        assert_eq!(xy.swapped(), yx);
    }
}

#[test]
fn same_permutation_keeps_counts() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let x = random_sequence(&mut rng, 30);
    let y = random_sequence(&mut rng, 30);
    let base = classify_pairs(&x, &y).unwrap();

    let rev_x: Vec<f64> = x.iter().rev().copied().collect();
    let rev_y: Vec<f64> = y.iter().rev().copied().collect();
    assert_eq!(classify_pairs(&rev_x, &rev_y).unwrap(), base);

    // Sort both by x.
    let (sorted_x, sorted_y): (Vec<f64>, Vec<f64>) = x
        .iter()
        .copied()
        .zip(y.iter().copied())
        .sorted_by(|a, b| a.0.total_cmp(&b.0))
        .unzip();
    assert_eq!(classify_pairs(&sorted_x, &sorted_y).unwrap(), base);
}

#[test]
fn negation_swaps_concordance() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let x = random_sequence(&mut rng, 25);
    let y = random_sequence(&mut rng, 25);
    let base = classify_pairs(&x, &y).unwrap();

    let neg_x: Vec<f64> = x.iter().map(|v| -v).collect();
    let neg_y: Vec<f64> = y.iter().map(|v| -v).collect();

    for c in [
        classify_pairs(&neg_x, &y).unwrap(),
        classify_pairs(&x, &neg_y).unwrap(),
    ] {
        assert_eq!(c.concordant, base.discordant);
        assert_eq!(c.discordant, base.concordant);
        assert_eq!(c.ties, base.ties);
        assert_eq!(c.left, base.left);
        assert_eq!(c.right, base.right);
    }

    assert_eq!(classify_pairs(&neg_x, &neg_y).unwrap(), base);
}

#[test]
fn zero_tolerance_comparator_matches_exact() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let x: Vec<f64> = (0..60).map(|_| rng.gen_range(0..4) as f64 * 0.1).collect();
    let y: Vec<f64> = (0..60).map(|_| rng.gen_range(0..4) as f64 * 0.1).collect();

    let cmp = ToleranceComparator::new(0.0);
    assert_eq!(
        classify_pairs_by(&x, &y, &cmp, &cmp).unwrap(),
        classify_pairs_by(&x, &y, &ExactComparator, &ExactComparator).unwrap()
    );
}

#[test]
fn matches_pairwise_enumeration() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let x = random_sequence(&mut rng, 40);
    let y = random_sequence(&mut rng, 40);

    let mut expected = PairCounts::new();
    for (i, j) in (0..x.len()).tuple_combinations() {
        let pair_x = [x[i], x[j]];
        let pair_y = [y[i], y[j]];
        expected += classify_pairs(&pair_x, &pair_y).unwrap();
    }

    assert_eq!(classify_pairs(&x, &y).unwrap(), expected);
}
