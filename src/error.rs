//! Error types
//!
//! The frame update itself never fails; these cover the two places where a
//! caller can hand the core something it must refuse.

use std::fmt;

/// Why the craft refused to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShootError {
    /// The shoot cooldown has not elapsed yet
    OnCooldown,
    /// No ammunition left in the magazine
    OutOfAmmo,
}

impl fmt::Display for ShootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShootError::OnCooldown => write!(f, "weapon is still cooling down"),
            ShootError::OutOfAmmo => write!(f, "out of ammunition"),
        }
    }
}

impl std::error::Error for ShootError {}

/// Failure loading or validating a [`crate::Tuning`]
#[derive(Debug)]
pub enum TuningError {
    /// The document was not valid tuning JSON
    Parse(serde_json::Error),
    /// A value parsed fine but is outside its usable range
    OutOfRange {
        /// Field name as it appears in the JSON document
        name: &'static str,
        /// The rejected value
        value: f32,
        /// Human-readable description of the accepted range
        expected: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning document: {}", e),
            TuningError::OutOfRange {
                name,
                value,
                expected,
            } => write!(f, "tuning value '{}' = {} is out of range ({})", name, value, expected),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::OutOfRange { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}
