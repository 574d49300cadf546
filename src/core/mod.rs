//! Library-wide error structures and serde payloads.

pub mod serialization;

pub use serialization::*;

/// Which constraint a query value violated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueryViolation {
    /// The value is not integral (fractional, NaN or infinite).
    NonInteger(f64),
    /// The value is below zero.
    Negative(f64),
    /// The value exceeds the number of trials.
    OutOfRange { value: f64, n: usize },
}

impl std::fmt::Display for QueryViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonInteger(value) => write!(f, "query value must be an integer, got {value}"),
            Self::Negative(value) => write!(f, "query value cannot be negative, got {value}"),
            Self::OutOfRange { value, n } => {
                write!(f, "query value cannot be greater than n={n}, got {value}")
            }
        }
    }
}

/// Errors surfaced by construction and queries.
#[derive(Debug, Clone, PartialEq)]
pub enum PoiBinError {
    /// Malformed probability input (shape or range).
    InvalidInput(String),
    /// A pmf/cdf/pval query outside the support.
    InvalidQuery(QueryViolation),
    /// The inverse transform produced a non-real or non-finite result.
    NumericalInconsistency(String),
    /// Engine configuration out of bounds.
    InvalidConfig(String),
}

impl std::fmt::Display for PoiBinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::InvalidQuery(violation) => write!(f, "invalid query: {violation}"),
            Self::NumericalInconsistency(msg) => write!(f, "numerical inconsistency: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for PoiBinError {}

impl From<QueryViolation> for PoiBinError {
    fn from(violation: QueryViolation) -> Self {
        Self::InvalidQuery(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_violated_rule() {
        let err = PoiBinError::from(QueryViolation::Negative(-1.0));
        assert_eq!(err.to_string(), "invalid query: query value cannot be negative, got -1");

        let err = PoiBinError::from(QueryViolation::OutOfRange { value: 4.0, n: 3 });
        assert!(err.to_string().contains("n=3"));

        let err = PoiBinError::InvalidInput("probabilities have to be non-negative".to_string());
        assert!(err.to_string().starts_with("invalid input:"));
    }
}
