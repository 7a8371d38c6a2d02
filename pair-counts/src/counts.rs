use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::PairCategory;

/// The number of unordered pairs in each category.
/// Every pair `{i, j}` with `i < j` is counted in exactly one field, so the fields always sum to `n * (n - 1) / 2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairCounts {
    pub concordant: usize,
    pub discordant: usize,
    pub ties: usize,
    /// Pairs tied in `x` only.
    pub left: usize,
    /// Pairs tied in `y` only, plus any pair that could not be ordered.
    pub right: usize,
}

impl PairCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: PairCategory) {
        *self.get_mut(category) += 1;
    }

    pub fn get(&self, category: PairCategory) -> usize {
        match category {
            PairCategory::Concordant => self.concordant,
            PairCategory::Discordant => self.discordant,
            PairCategory::Tie => self.ties,
            PairCategory::Left => self.left,
            PairCategory::Right => self.right,
        }
    }

    fn get_mut(&mut self, category: PairCategory) -> &mut usize {
        match category {
            PairCategory::Concordant => &mut self.concordant,
            PairCategory::Discordant => &mut self.discordant,
            PairCategory::Tie => &mut self.ties,
            PairCategory::Left => &mut self.left,
            PairCategory::Right => &mut self.right,
        }
    }

    /// Number of pairs classified.
    pub fn total(&self) -> usize {
        self.concordant + self.discordant + self.ties + self.left + self.right
    }

    /// The counts that classifying `(y, x)` instead of `(x, y)` would have produced.
    pub fn swapped(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            ..*self
        }
    }

    /// The Kendall tau distance: the number of pairs on which the two orderings disagree.
    /// A pair tied in one sequence but not the other counts as a disagreement, a pair tied in both does not.
    pub fn kendall_tau_distance(&self) -> usize {
        self.discordant + self.left + self.right
    }

    /// The Kendall tau distance divided by the maximum possible distance.
    pub fn normalised_kendall_tau_distance(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some(self.kendall_tau_distance() as f64 / total as f64)
    }

    /// Kendall's tau-a, which makes no adjustment for ties.
    pub fn tau_a(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some(self.score() / total as f64)
    }

    /// Kendall's tau-b, which adjusts for ties in either sequence.
    /// Returns `None` if every pair is tied in `x` or every pair is tied in `y`.
    pub fn tau_b(&self) -> Option<f64> {
        let ordered = (self.concordant + self.discordant) as f64;
        let untied_x = ordered + self.right as f64;
        let untied_y = ordered + self.left as f64;
        let denominator = (untied_x * untied_y).sqrt();
        if denominator == 0.0 {
            return None;
        }
        Some(self.score() / denominator)
    }

    fn score(&self) -> f64 {
        self.concordant as f64 - self.discordant as f64
    }
}

impl Add for PairCounts {
    type Output = PairCounts;

    fn add(self, rhs: Self) -> Self::Output {
        PairCounts {
            concordant: self.concordant + rhs.concordant,
            discordant: self.discordant + rhs.discordant,
            ties: self.ties + rhs.ties,
            left: self.left + rhs.left,
            right: self.right + rhs.right,
        }
    }
}

impl AddAssign for PairCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for PairCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(PairCounts::new(), Add::add)
    }
}
