mod dsl;
mod error;
mod eval;
mod query_runner;
mod store;

pub use dsl::*;
pub use error::{ParseError, QueryError};
pub use eval::eval_expr;
pub use query_runner::run_query;
pub use store::Store;
