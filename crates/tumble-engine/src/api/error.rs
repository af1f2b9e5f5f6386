use thiserror::Error;

/// Why a [`BodyDesc`](crate::BodyDesc) was rejected at spawn time.
///
/// The solver itself has no recoverable-error surface; validation happens
/// once, up front, so NaNs and negative masses never reach the simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("mass must be finite and non-negative, got {0}")]
    InvalidMass(f32),

    #[error("size must be finite and strictly positive on both axes, got ({0}, {1})")]
    InvalidSize(f32, f32),

    #[error("restitution must be finite and non-negative, got {0}")]
    InvalidRestitution(f32),

    #[error("position must be finite, got ({0}, {1})")]
    NonFinitePosition(f32, f32),

    #[error("velocity must be finite, got ({0}, {1})")]
    NonFiniteVelocity(f32, f32),
}
