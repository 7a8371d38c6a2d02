use anyhow::ensure;
use itertools::Itertools;
use pair_counts::{
    classify_pairs, classify_pairs_with_settings, par_classify_pairs_by, ClassifySettings,
    ExactComparator, PairCounts,
};

use crate::random::DeterministicRandomProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display)]
pub enum Property {
    /// The counts add up to `n * (n - 1) / 2`.
    CoversAllPairs,
    /// Fewer than two observations means nothing to count.
    TrivialInputIsEmpty,
    /// Classifying `(y, x)` swaps left and right.
    SwapSymmetry,
    /// Reordering both sequences the same way changes nothing.
    SamePermutation,
    /// Negating `x` swaps concordant and discordant.
    Negation,
    /// Agrees with evaluating the five conditions one after the other.
    BranchChain,
    /// The rayon path gives the same counts.
    ParallelAgreement,
}

impl Property {
    /// NaN in `y` with an ordered `x` lands in `right` whichever side it is on, which breaks the swap.
    pub fn holds_with_nan(&self) -> bool {
        !matches!(self, Property::SwapSymmetry)
    }
}

pub struct CheckInput<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
    pub counts: PairCounts,
    pub settings: &'a ClassifySettings,
}

impl CheckInput<'_> {
    fn has_nan(&self) -> bool {
        self.x.iter().chain(self.y.iter()).any(|v| v.is_nan())
    }

    fn classify(&self, x: &[f64], y: &[f64]) -> anyhow::Result<PairCounts> {
        Ok(classify_pairs_with_settings(x, y, self.settings)?)
    }
}

/// Returns `Ok(false)` if the property does not apply to this input.
pub fn check(
    property: Property,
    input: &CheckInput,
    random_provider: &DeterministicRandomProvider,
) -> anyhow::Result<bool> {
    if input.has_nan() && !property.holds_with_nan() {
        return Ok(false);
    }

    let n = input.x.len();
    let counts = input.counts;

    match property {
        Property::CoversAllPairs => {
            let expected = n * n.saturating_sub(1) / 2;
            ensure!(
                counts.total() == expected,
                "{} pairs counted, expected {}",
                counts.total(),
                expected
            );
        }
        Property::TrivialInputIsEmpty => {
            if n > 1 {
                return Ok(false);
            }
            ensure!(counts == PairCounts::new(), "non-empty counts {:?}", counts);
        }
        Property::SwapSymmetry => {
            let swapped = input.classify(input.y, input.x)?;
            ensure!(
                swapped == counts.swapped(),
                "swapped {:?}, original {:?}",
                swapped,
                counts
            );
        }
        Property::SamePermutation => {
            let mut order: Vec<usize> = (0..n).collect();
            random_provider.shuffle(&mut order);
            let x: Vec<f64> = order.iter().map(|&i| input.x[i]).collect();
            let y: Vec<f64> = order.iter().map(|&i| input.y[i]).collect();
            let permuted = input.classify(&x, &y)?;
            ensure!(
                permuted == counts,
                "permuted {:?}, original {:?}",
                permuted,
                counts
            );
        }
        Property::Negation => {
            let x: Vec<f64> = input.x.iter().map(|v| -v).collect();
            let negated = input.classify(&x, input.y)?;
            let expected = PairCounts {
                concordant: counts.discordant,
                discordant: counts.concordant,
                ..counts
            };
            ensure!(
                negated == expected,
                "negated {:?}, expected {:?}",
                negated,
                expected
            );
        }
        Property::BranchChain => {
            if input.settings.tolerance != 0.0 {
                return Ok(false);
            }
            let expected = branch_chain(input.x, input.y);
            ensure!(
                counts == expected,
                "counted {:?}, branch chain gives {:?}",
                counts,
                expected
            );
        }
        Property::ParallelAgreement => {
            if input.settings.tolerance != 0.0 {
                return Ok(false);
            }
            let parallel =
                par_classify_pairs_by(input.x, input.y, &ExactComparator, &ExactComparator)?;
            let serial = classify_pairs(input.x, input.y)?;
            ensure!(
                parallel == serial && serial == counts,
                "parallel {:?}, serial {:?}, counted {:?}",
                parallel,
                serial,
                counts
            );
        }
    }

    Ok(true)
}

/// The five conditions tested in order, first match wins.
fn branch_chain(x: &[f64], y: &[f64]) -> PairCounts {
    let mut counts = PairCounts::new();
    for (i, j) in (0..x.len()).tuple_combinations() {
        if (x[i] > x[j] && y[i] > y[j]) || (x[i] < x[j] && y[i] < y[j]) {
            counts.concordant += 1;
        } else if (x[i] > x[j] && y[i] < y[j]) || (x[i] < x[j] && y[i] > y[j]) {
            counts.discordant += 1;
        } else if x[i] == x[j] && y[i] == y[j] {
            counts.ties += 1;
        } else if x[i] == x[j] && y[i] != y[j] {
            counts.left += 1;
        } else {
            counts.right += 1;
        }
    }
    counts
}
