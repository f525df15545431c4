//! Filter compilation, result ordering and the query service.

pub mod compiler;
pub mod orderer;
pub mod query;

pub use compiler::{FilterClause, FilterCompiler, TaskPredicate};
pub use orderer::{canonical_order, order_tasks};
pub use query::{TaskQueryError, TaskQueryResult, TaskQueryService};
