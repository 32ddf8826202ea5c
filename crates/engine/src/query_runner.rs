use log::debug;

use crate::dsl::parse_filter;
use crate::error::QueryError;
use crate::eval::eval_expr;
use crate::store::Store;

/// Run `filter` against every record in the store, returning matching paths
/// in store scan order (= insertion order). An empty or whitespace-only
/// filter matches everything and skips parsing entirely.
///
/// Errors are terminal for the run. Results are materialized before being
/// returned so a failed run can never surface partial output.
pub fn run_query(store: &Store, filter: &str) -> Result<Vec<String>, QueryError> {
    if filter.trim().is_empty() {
        return Ok(store
            .scan()
            .map(|record| record.path.display().to_string())
            .collect());
    }

    let parsed = parse_filter(filter)?;
    debug!("[query] filter accepted: {:?}", parsed.expr);

    let mut matches = Vec::new();
    for record in store.scan() {
        if eval_expr(&parsed.expr, record)? {
            matches.push(record.path.display().to_string());
        }
    }

    Ok(matches)
}

#[cfg(test)]
#[path = "query_runner_tests.rs"]
mod tests;
