use std::fmt;

use huefade_engine::paint::ColorParseError;

use crate::transition::StopKind;

/// Rejected color-list update. The view keeps its previous state.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionError {
    /// The list mixes colors and numeric channel values.
    MixedStopKinds { index: usize, expected: StopKind, found: StopKind },
    /// A stop literal looked like a color but did not parse.
    InvalidColor(ColorParseError),
    /// A stop literal was neither a color nor a number.
    InvalidNumber(String),
    /// A stop holds NaN or an infinity, which would never compare equal to itself.
    NonFiniteStop { index: usize },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::MixedStopKinds { index, expected, found } => write!(
                f,
                "stop {index} is a {found} but the list started with a {expected}; \
                 a color list may not mix colors and numbers"
            ),
            TransitionError::InvalidColor(err) => write!(f, "{err}"),
            TransitionError::InvalidNumber(s) => write!(f, "stop {s:?} is neither a color nor a number"),
            TransitionError::NonFiniteStop { index } => write!(f, "stop {index} is not a finite value"),
        }
    }
}

impl std::error::Error for TransitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransitionError::InvalidColor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ColorParseError> for TransitionError {
    fn from(err: ColorParseError) -> Self {
        TransitionError::InvalidColor(err)
    }
}
