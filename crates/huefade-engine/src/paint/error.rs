use std::fmt;

/// A malformed color literal (e.g. `"#12345"` or `"red"`).
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    /// The literal as it was supplied.
    pub input: String,
    pub reason: &'static str,
}

impl ColorParseError {
    pub(crate) fn new(input: &str, reason: &'static str) -> Self {
        Self { input: input.to_string(), reason }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for ColorParseError {}
