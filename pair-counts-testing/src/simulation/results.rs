use pair_counts::PairCounts;

/// Collects the outcome of a run while it is in progress.
/// Turned into `CheckResults` with `build` once the run is over.
pub(super) struct CheckResultsBuilder {
    /// Number of generated input pairs.
    inputs_checked: usize,
    /// Number of property checks that applied to their input and passed.
    properties_passed: usize,
    /// Number of property checks that did not apply to their input.
    properties_skipped: usize,
    /// Number of generated inputs containing at least one NaN.
    inputs_with_nan: usize,
    totals: PairCounts,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckResults {
    /// Number of generated input pairs.
    pub inputs_checked: usize,
    /// Number of property checks that applied to their input and passed.
    pub properties_passed: usize,
    /// Number of property checks that did not apply to their input.
    pub properties_skipped: usize,
    /// Number of generated inputs containing at least one NaN.
    pub inputs_with_nan: usize,
    /// Sum of the counts of every generated input.
    pub totals: PairCounts,
}

impl CheckResultsBuilder {
    pub fn new() -> Self {
        Self {
            inputs_checked: 0,
            properties_passed: 0,
            properties_skipped: 0,
            inputs_with_nan: 0,
            totals: PairCounts::new(),
        }
    }

    pub fn add_input(&mut self, counts: PairCounts, has_nan: bool) {
        self.inputs_checked += 1;
        self.totals += counts;
        if has_nan {
            self.inputs_with_nan += 1;
        }
    }

    pub fn property_passed(&mut self) {
        self.properties_passed += 1;
    }

    pub fn property_skipped(&mut self) {
        self.properties_skipped += 1;
    }

    pub fn build(self) -> CheckResults {
        CheckResults {
            inputs_checked: self.inputs_checked,
            properties_passed: self.properties_passed,
            properties_skipped: self.properties_skipped,
            inputs_with_nan: self.inputs_with_nan,
            totals: self.totals,
        }
    }
}

impl CheckResults {
    /// Combine the results of two independent runs.
    pub fn merge(self, other: Self) -> Self {
        Self {
            inputs_checked: self.inputs_checked + other.inputs_checked,
            properties_passed: self.properties_passed + other.properties_passed,
            properties_skipped: self.properties_skipped + other.properties_skipped,
            inputs_with_nan: self.inputs_with_nan + other.inputs_with_nan,
            totals: self.totals + other.totals,
        }
    }
}
