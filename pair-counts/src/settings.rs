use crate::error::SettingsError;

#[derive(Clone, Debug, Copy, PartialEq)]
pub struct ClassifySettings {
    /// Two values from the same sequence that are at most this far apart count as tied.
    /// Zero means only exactly equal values are tied.
    pub tolerance: f64,

    /// Inputs with at least this many observations are classified on the rayon thread pool.
    /// Has no effect without the `parallel` feature. `usize::MAX` keeps everything on the calling thread.
    pub parallel_min_len: usize,
}

impl ClassifySettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.tolerance.is_finite() {
            return Err(SettingsError::NonFiniteTolerance(self.tolerance));
        }
        if self.tolerance < 0.0 {
            return Err(SettingsError::NegativeTolerance(self.tolerance));
        }
        Ok(())
    }
}

impl Default for ClassifySettings {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            parallel_min_len: 2048,
        }
    }
}
