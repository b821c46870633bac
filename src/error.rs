use thiserror::Error;

/// The only failure mode in this crate: a motion model constructed or
/// updated with parameters outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("length must be positive and finite, got {0}")]
    NonPositiveLength(f32),
    #[error("velocity must be positive and finite, got {0}")]
    NonPositiveVelocity(f32),
}

pub(crate) fn check_length(x: f32) -> Result<f32, DomainError> {
    if x > 0.0 && x.is_finite() {
        Ok(x)
    } else {
        Err(DomainError::NonPositiveLength(x))
    }
}

pub(crate) fn check_velocity(x: f32) -> Result<f32, DomainError> {
    if x > 0.0 && x.is_finite() {
        Ok(x)
    } else {
        Err(DomainError::NonPositiveVelocity(x))
    }
}
