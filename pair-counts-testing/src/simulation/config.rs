use std::ops::Range;

use pair_counts::ClassifySettings;

#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Every seed is an independent run.
    pub seeds: Range<u64>,
    /// Number of input pairs generated per seed.
    pub rounds_per_seed: usize,
    /// Longest sequence generated. Lengths are uniform in `0..=max_len`.
    pub max_len: usize,
    /// Number of distinct values drawn from. Smaller means more ties.
    pub alphabet_size: u64,
    /// Roughly one in this many values is NaN. Zero disables NaN.
    pub nan_odds: u64,
    pub settings: ClassifySettings,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            seeds: 0..64,
            rounds_per_seed: 50,
            max_len: 120,
            alphabet_size: 7,
            nan_odds: 40,
            settings: ClassifySettings::default(),
        }
    }
}
