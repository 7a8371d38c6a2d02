//! Classification of every unordered pair of observations of two paired sequences,
//! the building block of Kendall's tau and related rank statistics.

mod category;
pub mod compare;
mod counts;
mod error;
#[cfg(feature = "parallel")]
mod parallel;
pub mod settings;

#[cfg(test)]
mod test;

pub use category::PairCategory;
pub use compare::{Comparator, ExactComparator, ToleranceComparator};
pub use counts::PairCounts;
pub use error::{PairCountError, SettingsError};
#[cfg(feature = "parallel")]
pub use parallel::par_classify_pairs_by;
pub use settings::ClassifySettings;

/// Count the concordant, discordant, tied and partially tied pairs of `x` and `y`.
///
/// Values are compared exactly, so `0.1 + 0.2` and `0.3` are not tied.
/// Fails with `InvalidInput` if `x` and `y` have different lengths.
pub fn classify_pairs<T, K>(x: &[T], y: &[K]) -> Result<PairCounts, PairCountError>
where
    T: PartialOrd,
    K: PartialOrd,
{
    classify_pairs_by(x, y, &ExactComparator, &ExactComparator)
}

/// Like [`classify_pairs`], but with the comparison for each sequence supplied by the caller.
pub fn classify_pairs_by<T, K, CX, CY>(
    x: &[T],
    y: &[K],
    cx: &CX,
    cy: &CY,
) -> Result<PairCounts, PairCountError>
where
    CX: Comparator<T>,
    CY: Comparator<K>,
{
    check_lengths(x, y)?;
    log::debug!("Classifying pairs of {} observations", x.len());

    let counts = (0..x.len())
        .map(|i| classify_row(x, y, i, cx, cy))
        .sum::<PairCounts>();

    log::debug!("Classified {} pairs", counts.total());
    Ok(counts)
}

/// Classify two real-valued sequences according to `settings`.
pub fn classify_pairs_with_settings(
    x: &[f64],
    y: &[f64],
    settings: &ClassifySettings,
) -> Result<PairCounts, PairCountError> {
    settings.validate()?;
    let comparator = ToleranceComparator::new(settings.tolerance);

    #[cfg(feature = "parallel")]
    {
        if x.len() >= settings.parallel_min_len {
            return par_classify_pairs_by(x, y, &comparator, &comparator);
        }
    }

    classify_pairs_by(x, y, &comparator, &comparator)
}

pub(crate) fn check_lengths<T, K>(x: &[T], y: &[K]) -> Result<(), PairCountError> {
    if x.len() != y.len() {
        log::debug!(
            "Refusing to classify sequences of unequal length ({} and {})",
            x.len(),
            y.len()
        );
        return Err(PairCountError::InvalidInput {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok(())
}

/// All pairs `(i, j)` with `j > i`.
/// `x` and `y` must have the same length.
pub(crate) fn classify_row<T, K, CX, CY>(x: &[T], y: &[K], i: usize, cx: &CX, cy: &CY) -> PairCounts
where
    CX: Comparator<T>,
    CY: Comparator<K>,
{
    let mut counts = PairCounts::new();
    for j in i + 1..x.len() {
        let a = cx.compare(&x[i], &x[j]);
        let b = cy.compare(&y[i], &y[j]);
        counts.record(PairCategory::from_orderings(a, b));
    }
    counts
}
