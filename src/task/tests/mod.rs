//! Unit tests for the task domain, its in-memory store and lifecycle service.
