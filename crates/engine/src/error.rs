use thiserror::Error;

/// Malformed filter expression: syntax error, unknown column, unbalanced
/// grouping, or a literal that does not fit the column's type. Carries the
/// offending lexeme and its byte position in the filter string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at byte {pos}: {message} (near `{token}`)")]
pub struct ParseError {
    pub message: String,
    pub token: String,
    pub pos: usize,
}

/// Terminal errors for one query run. Neither variant is retried, and no
/// partial result is emitted for a run that produced one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Operator applied to a column whose type cannot support it. This
    /// aborts the scan: a filter that is unsound for the schema must not
    /// produce a misleadingly empty result set.
    #[error("type mismatch: {op} is not valid on {kind} column `{column}`")]
    TypeMismatch {
        column: &'static str,
        kind: &'static str,
        op: &'static str,
    },
}
