use std::fmt;
use std::str::FromStr;

use huefade_engine::paint::Color;

use crate::error::TransitionError;

/// One gradient stop value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StopValue {
    Color(Color),
    /// Single channel value in `[0, 1]`, painted as an opaque gray.
    Number(f32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StopKind {
    Color,
    Number,
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopKind::Color => "color",
            StopKind::Number => "number",
        })
    }
}

impl StopValue {
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            StopValue::Color(c) => c.is_finite(),
            StopValue::Number(n) => n.is_finite(),
        }
    }

    #[inline]
    pub fn kind(&self) -> StopKind {
        match self {
            StopValue::Color(_) => StopKind::Color,
            StopValue::Number(_) => StopKind::Number,
        }
    }

    /// The color a renderer paints for this stop.
    #[inline]
    pub fn to_color(self) -> Color {
        match self {
            StopValue::Color(c) => c,
            StopValue::Number(n) => Color::gray(n),
        }
    }

    /// Value at progress `t` between `self` (t = 0) and `end` (t = 1).
    ///
    /// Colors move channel by channel, numbers move linearly. Stops of
    /// different kinds do not interpolate: the result is `end`.
    pub fn interpolate(self, end: StopValue, t: f32) -> StopValue {
        match (self, end) {
            (StopValue::Color(a), StopValue::Color(b)) => StopValue::Color(a.lerp(b, t)),
            (StopValue::Number(a), StopValue::Number(b)) => StopValue::Number(a + (b - a) * t),
            (_, end) => end,
        }
    }
}

impl From<Color> for StopValue {
    fn from(c: Color) -> Self {
        StopValue::Color(c)
    }
}

impl From<f32> for StopValue {
    fn from(n: f32) -> Self {
        StopValue::Number(n)
    }
}

impl FromStr for StopValue {
    type Err = TransitionError;

    /// `#…` parses as a hex color, anything else as a number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Ok(StopValue::Color(Color::from_hex(s)?));
        }
        s.parse::<f32>()
            .ok()
            .filter(|n| n.is_finite())
            .map(StopValue::Number)
            .ok_or_else(|| TransitionError::InvalidNumber(s.to_string()))
    }
}

impl fmt::Display for StopValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopValue::Color(c) => write!(f, "{c}"),
            StopValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Rejects lists that mix colors and numbers or hold non-finite values.
/// Empty lists are valid.
pub fn validate_stops(stops: &[StopValue]) -> Result<(), TransitionError> {
    if let Some(index) = stops.iter().position(|s| !s.is_finite()) {
        return Err(TransitionError::NonFiniteStop { index });
    }
    let Some(expected) = stops.first().map(StopValue::kind) else {
        return Ok(());
    };
    match stops.iter().position(|s| s.kind() != expected) {
        Some(index) => Err(TransitionError::MixedStopKinds {
            index,
            expected,
            found: stops[index].kind(),
        }),
        None => Ok(()),
    }
}

/// Parses and validates a list of stop literals.
pub fn parse_stops<S: AsRef<str>>(literals: &[S]) -> Result<Vec<StopValue>, TransitionError> {
    let stops = literals
        .iter()
        .map(|s| s.as_ref().parse::<StopValue>())
        .collect::<Result<Vec<_>, _>>()?;
    validate_stops(&stops)?;
    Ok(stops)
}
