use thiserror::Error;

/// Failure of a generation run that is not a caller contract violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The parameters would spawn more stems than `max_stems` allows.
    #[error("parameter budget exceeded: more than {limit} stems would be generated")]
    BudgetExceeded { limit: usize },
}

/// A parameter set that violates the generator's input contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("radial resolution must be at least 3, got {0}")]
    RadialResolution(u32),

    #[error("segment resolution must be at least 1, got {0}")]
    SegmentResolution(u32),

    #[error("levels must be at most {max}, got {levels}")]
    TooManyLevels { levels: u32, max: u32 },

    #[error("{levels} branch levels need {needed} level data entries, found {found}")]
    MissingLevelData {
        levels: u32,
        needed: usize,
        found: usize,
    },

    #[error("level {level}: curve resolution must be at least 1")]
    CurveResolution { level: usize },

    #[error("level {level}: taper must lie in [0, 3], got {taper}")]
    Taper { level: usize, taper: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: String, value: f32 },

    #[error("{field} must be finite")]
    NotFinite { field: String },

    #[error("max_stems must be at least 1")]
    ZeroBudget,
}
