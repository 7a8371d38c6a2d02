use rayon::prelude::*;

use crate::{check_lengths, classify_row, Comparator, PairCountError, PairCounts};

/// Like [`crate::classify_pairs_by`], but each row of the pair triangle is classified on the rayon thread pool.
/// The result is identical to the serial version.
pub fn par_classify_pairs_by<T, K, CX, CY>(
    x: &[T],
    y: &[K],
    cx: &CX,
    cy: &CY,
) -> Result<PairCounts, PairCountError>
where
    T: Sync,
    K: Sync,
    CX: Comparator<T> + Sync,
    CY: Comparator<K> + Sync,
{
    check_lengths(x, y)?;
    log::debug!(
        "Classifying pairs of {} observations on {} threads",
        x.len(),
        rayon::current_num_threads()
    );

    // Early rows hold far more pairs than late ones, so let rayon split finely.
    let counts = (0..x.len())
        .into_par_iter()
        .with_max_len(1)
        .map(|i| classify_row(x, y, i, cx, cy))
        .sum::<PairCounts>();

    log::debug!("Classified {} pairs", counts.total());
    Ok(counts)
}
