use std::cmp::Ordering;

/// The relationship between two observations `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIs, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum PairCategory {
    /// Both sequences move in the same direction.
    Concordant,
    /// The sequences move in opposite directions.
    Discordant,
    /// Neither sequence shows a difference.
    Tie,
    /// Only `x` shows no difference.
    Left,
    /// Everything else. With comparable values this is exactly "only `y` shows no difference".
    Right,
}

impl PairCategory {
    /// Classify a pair from the outcome of comparing `x[i]` to `x[j]` and `y[i]` to `y[j]`.
    /// `None` means the two values could not be ordered (NaN).
    ///
    /// An unordered `x` always ends up in `Right`, and an equal `x` with an unordered `y`
    /// ends up in `Left`, since an unordered `y` is still "not equal".
    pub fn from_orderings(x: Option<Ordering>, y: Option<Ordering>) -> Self {
        use Ordering::*;

        match (x, y) {
            (Some(Less), Some(Less)) | (Some(Greater), Some(Greater)) => PairCategory::Concordant,
            (Some(Less), Some(Greater)) | (Some(Greater), Some(Less)) => PairCategory::Discordant,
            (Some(Equal), Some(Equal)) => PairCategory::Tie,
            (Some(Equal), _) => PairCategory::Left,
            _ => PairCategory::Right,
        }
    }
}
