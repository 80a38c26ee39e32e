use thiserror::Error;

/// Rejected carousel/scene configuration.
///
/// Validated once when a [`crate::Scene`] is built; a frontend that receives
/// one of these treats it as fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("character count must be at least 1")]
    NoCharacters,
    #[error("spacing must be finite and positive, got {0}")]
    Spacing(f32),
    #[error("drag sensitivity must be finite and positive, got {0}")]
    Sensitivity(f32),
    #[error("spring mass must be finite and positive, got {0}")]
    SpringMass(f32),
    #[error("spring tension must be finite and positive, got {0}")]
    SpringTension(f32),
    #[error("spring friction must be finite and positive, got {0}")]
    SpringFriction(f32),
    #[error("settle precision must be finite and positive, got {0}")]
    SettlePrecision(f32),
}

#[inline]
pub(crate) fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
