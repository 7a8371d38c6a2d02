use std::cmp::Ordering;

/// Decides how two observations from the same sequence relate to each other.
pub trait Comparator<T: ?Sized> {
    /// Returns `None` if the values cannot be ordered.
    fn compare(&self, a: &T, b: &T) -> Option<Ordering>;
}

/// Plain `PartialOrd` comparison. Values are only tied if they are exactly equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactComparator;

impl<T> Comparator<T> for ExactComparator
where
    T: PartialOrd + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

/// Treats two values as tied if they are at most `tolerance` apart.
#[derive(Debug, Clone, Copy)]
pub struct ToleranceComparator {
    tolerance: f64,
}

impl ToleranceComparator {
    /// The tolerance is expected to be finite and non-negative, see `ClassifySettings::validate`.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Comparator<f64> for ToleranceComparator {
    fn compare(&self, a: &f64, b: &f64) -> Option<Ordering> {
        // Infinities of the same sign would give NaN here.
        if a == b || (a - b).abs() <= self.tolerance {
            return Some(Ordering::Equal);
        }
        a.partial_cmp(b)
    }
}
