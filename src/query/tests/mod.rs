//! Unit tests for filter compilation, ordering and the query service.
