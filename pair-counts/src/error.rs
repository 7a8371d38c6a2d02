#[derive(Debug, Clone, PartialEq)]
pub enum PairCountError {
    /// The two input sequences do not have the same number of observations.
    InvalidInput { x_len: usize, y_len: usize },
    InvalidSettings(SettingsError),
}

impl std::fmt::Display for PairCountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairCountError::InvalidInput { x_len, y_len } => write!(
                f,
                "Invalid input: sequences have unequal lengths ({} and {})",
                x_len, y_len
            ),
            PairCountError::InvalidSettings(err) => write!(f, "Invalid settings: {}", err),
        }
    }
}

impl std::error::Error for PairCountError {}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    NegativeTolerance(f64),
    NonFiniteTolerance(f64),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::NegativeTolerance(t) => write!(f, "tolerance {} is negative", t),
            SettingsError::NonFiniteTolerance(t) => write!(f, "tolerance {} is not finite", t),
        }
    }
}

impl From<SettingsError> for PairCountError {
    fn from(val: SettingsError) -> Self {
        PairCountError::InvalidSettings(val)
    }
}
