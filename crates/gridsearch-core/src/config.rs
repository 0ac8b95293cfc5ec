//! Grid parsing configuration.

/// What to do with a token that is not `s`, `t`, `-1` or a digit string.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnknownTokens {
    /// Treat the cell as open with the default cost of 1 and log a warning.
    #[default]
    DefaultCost,
    /// Fail with [`MalformedGridError::UnknownToken`](crate::MalformedGridError::UnknownToken).
    Reject,
}

/// Options for [`Grid::parse`](crate::Grid::parse) and
/// [`Grid::from_tokens`](crate::Grid::from_tokens).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseConfig {
    pub unknown_tokens: UnknownTokens,
}

impl ParseConfig {
    /// Configuration that rejects unknown tokens.
    pub const fn strict() -> Self {
        Self {
            unknown_tokens: UnknownTokens::Reject,
        }
    }
}
